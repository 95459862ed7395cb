//! ARFF
//!
//! Reader for the attribute-relation file format. Every attribute is read
//! as categorical; nominal declarations (`{a, b, c}`) become declared
//! domains. The last declared attribute is the class attribute and `?`
//! marks a missing value, which is left out of the example.
use crate::data::{Dataset, Example};
use crate::errors::ArborError;
use log::debug;
use std::fs;
use std::path::Path;

/// Read and parse the ARFF file at `path`.
pub fn read_arff<P: AsRef<Path>>(path: P) -> Result<Dataset, ArborError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| ArborError::UnableToRead(format!("{}: {}", path.display(), e)))?;
    parse_arff(&text)
}

/// Parse ARFF text into a dataset.
pub fn parse_arff(text: &str) -> Result<Dataset, ArborError> {
    let mut names: Vec<String> = Vec::new();
    let mut domains: Vec<(String, Vec<String>)> = Vec::new();
    let mut examples: Vec<Example> = Vec::new();
    let mut in_data = false;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') {
            continue;
        }
        let lower = line.to_lowercase();
        if lower.starts_with("@relation") {
            continue;
        }
        if lower.starts_with("@attribute") {
            let (name, spec) = split_attribute(line).ok_or_else(|| ArborError::MalformedArff {
                line: line_no,
                reason: "expected `@attribute <name> <type>`".to_string(),
            })?;
            if let Some(values) = parse_nominal(spec) {
                domains.push((name.clone(), values));
            }
            names.push(name);
            continue;
        }
        if lower.starts_with("@data") {
            in_data = true;
            continue;
        }
        if !in_data {
            return Err(ArborError::MalformedArff {
                line: line_no,
                reason: format!("unexpected line before @data: {}", line),
            });
        }

        let values: Vec<&str> = line.split(',').collect();
        if values.len() != names.len() {
            return Err(ArborError::MalformedArff {
                line: line_no,
                reason: format!("data row has {} columns, expected {}", values.len(), names.len()),
            });
        }
        let example: Example = names
            .iter()
            .zip(values)
            .map(|(name, value)| (name.as_str(), unquote(value.trim())))
            .filter(|(_, value)| *value != "?")
            .collect();
        examples.push(example);
    }

    let (class_attribute, attributes) = match names.split_last() {
        Some((class, rest)) if !examples.is_empty() => (class.clone(), rest.to_vec()),
        _ => {
            return Err(ArborError::MalformedArff {
                line: text.lines().count(),
                reason: "no attributes or no data found".to_string(),
            })
        }
    };
    debug!(
        "Read {} examples with {} attributes, class attribute {}.",
        examples.len(),
        attributes.len(),
        class_attribute
    );

    let mut dataset = Dataset::new(attributes, class_attribute, examples);
    for (name, values) in domains {
        dataset = dataset.with_domain(name, values);
    }
    Ok(dataset)
}

/// Split an `@attribute` line into its (unquoted) name and type spec.
fn split_attribute(line: &str) -> Option<(String, &str)> {
    let rest = line.get("@attribute".len()..)?.trim_start();
    let (name, spec) = if let Some(quoted) = rest.strip_prefix('\'') {
        let end = quoted.find('\'')?;
        (&quoted[..end], &quoted[end + 1..])
    } else {
        let end = rest.find(|c: char| c.is_whitespace() || c == '{')?;
        (&rest[..end], &rest[end..])
    };
    let spec = spec.trim();
    if name.is_empty() || spec.is_empty() {
        return None;
    }
    Some((name.to_string(), spec))
}

/// Values of a nominal type spec such as `{yes, no}`.
fn parse_nominal(spec: &str) -> Option<Vec<String>> {
    let start = spec.find('{')?;
    let end = spec.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(
        spec[start + 1..end]
            .split(',')
            .map(|v| unquote(v.trim()).to_string())
            .collect(),
    )
}

fn unquote(value: &str) -> &str {
    for q in ['\'', '"'] {
        if value.len() >= 2 && value.starts_with(q) && value.ends_with(q) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEATHER: &str = "% toy data
@relation weather

@attribute outlook {sunny, overcast, rain}
@attribute 'wind speed' {weak,strong}
@attribute play {yes,no}

@data
sunny,weak,no
overcast,?,yes
'rain',strong,yes
";

    #[test]
    fn test_parse_arff() {
        let ds = parse_arff(WEATHER).unwrap();
        assert_eq!(ds.attributes, vec!["outlook".to_string(), "wind speed".to_string()]);
        assert_eq!(ds.class_attribute, "play");
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.domain("outlook"), vec!["sunny", "overcast", "rain"]);
        assert_eq!(ds.domain("wind speed"), vec!["weak", "strong"]);
        assert!(ds.examples[1].is_missing("wind speed"));
        assert_eq!(ds.examples[2].get("outlook"), Some("rain"));
    }

    #[test]
    fn test_parse_arff_domain_without_space() {
        let ds = parse_arff("@attribute outlook{sunny,rain}\n@attribute play{yes,no}\n@data\nsunny,no\n").unwrap();
        assert_eq!(ds.attributes, vec!["outlook".to_string()]);
        assert_eq!(ds.domain("outlook"), vec!["sunny", "rain"]);
    }

    #[test]
    fn test_parse_arff_column_mismatch() {
        let text = "@attribute a {x}\n@attribute c {p}\n@data\nx\n";
        match parse_arff(text) {
            Err(ArborError::MalformedArff { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_parse_arff_no_data() {
        assert!(parse_arff("@relation r\n@attribute a {x}\n@data\n").is_err());
        assert!(parse_arff("").is_err());
    }

    #[test]
    fn test_split_attribute_numeric_type() {
        assert_eq!(split_attribute("@attribute age numeric"), Some(("age".to_string(), "numeric")));
        assert_eq!(split_attribute("@attribute age"), None);
        assert_eq!(
            split_attribute("@attribute outlook{sunny,rain}"),
            Some(("outlook".to_string(), "{sunny,rain}"))
        );
        assert_eq!(parse_nominal("numeric"), None);
    }
}
