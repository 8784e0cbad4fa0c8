use anyhow::{Result, bail};
use pkg_naming::config::OutputFormat;
use pkg_naming::{kebab_case, sanitize_name, validate_name};
use serde::Serialize;

/// Outcome for a single input name.
#[derive(Debug, Clone, Serialize)]
pub struct NameReport {
    pub input: String,
    pub sanitized: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NameReport {
    /// Check `name` as given, without sanitizing it.
    pub fn validated(name: &str) -> Self {
        Self::new(name, name.to_string())
    }

    /// Sanitize `name` and check the result.
    pub fn sanitized(name: &str) -> Self {
        Self::new(name, sanitize_name(name))
    }

    fn new(input: &str, sanitized: String) -> Self {
        let error = validate_name(&sanitized).err().map(|e| e.to_string());
        Self {
            input: input.to_string(),
            sanitized,
            valid: error.is_none(),
            error,
        }
    }
}

/// Kebab-case form of a single input.
#[derive(Debug, Clone, Serialize)]
pub struct KebabReport {
    pub input: String,
    pub kebab: String,
}

impl KebabReport {
    pub fn new(name: &str) -> Self {
        Self {
            input: name.to_string(),
            kebab: kebab_case(name),
        }
    }
}

/// Which reports count as failures.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailurePolicy {
    pub reject_empty: bool,
    pub require_valid: bool,
}

impl FailurePolicy {
    fn rejects(&self, report: &NameReport) -> bool {
        (self.reject_empty && report.sanitized.is_empty()) || (self.require_valid && !report.valid)
    }

    /// Fail when any report is rejected, naming the offending inputs.
    pub fn check(&self, reports: &[NameReport]) -> Result<()> {
        let rejected: Vec<&str> = reports
            .iter()
            .filter(|r| self.rejects(r))
            .map(|r| r.input.as_str())
            .collect();
        if !rejected.is_empty() {
            bail!(
                "{} of {} names rejected: {}",
                rejected.len(),
                reports.len(),
                rejected.join(", ")
            );
        }
        Ok(())
    }
}

/// Render sanitize results. Plain output is one sanitized name per line.
pub fn render_sanitized(reports: &[NameReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(reports
            .iter()
            .map(|r| r.sanitized.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => to_json(reports),
        OutputFormat::Yaml => to_yaml(reports),
    }
}

/// Render validation results. Plain output is `name: ok` or `name: <error>`.
pub fn render_validated(reports: &[NameReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(reports
            .iter()
            .map(|r| match &r.error {
                None => format!("{}: ok", r.input),
                Some(e) => format!("{}: {}", r.input, e),
            })
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => to_json(reports),
        OutputFormat::Yaml => to_yaml(reports),
    }
}

/// Render kebab-case results. Plain output is one converted name per line.
pub fn render_kebab(reports: &[KebabReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain => Ok(reports
            .iter()
            .map(|r| r.kebab.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => to_json(reports),
        OutputFormat::Yaml => to_yaml(reports),
    }
}

fn to_json<T: Serialize>(reports: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

fn to_yaml<T: Serialize>(reports: &[T]) -> Result<String> {
    let out = serde_yaml::to_string(reports)?;
    Ok(out.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_report() {
        let r = NameReport::sanitized("/charts/MyService.yaml");
        assert_eq!(r.input, "/charts/MyService.yaml");
        assert_eq!(r.sanitized, "myservice");
        assert!(r.valid);
        assert!(r.error.is_none());
    }

    #[test]
    fn empty_sanitized_report_is_invalid() {
        let r = NameReport::sanitized("1234");
        assert_eq!(r.sanitized, "");
        assert!(!r.valid);
        assert_eq!(r.error.as_deref(), Some("name must not be empty"));
    }

    #[test]
    fn validated_report_keeps_input() {
        let r = NameReport::validated("My_App");
        assert_eq!(r.sanitized, "My_App");
        assert!(!r.valid);
    }

    #[test]
    fn default_policy_accepts_everything() {
        let reports = vec![NameReport::sanitized("123"), NameReport::sanitized("ok")];
        assert!(FailurePolicy::default().check(&reports).is_ok());
    }

    #[test]
    fn reject_empty_names_the_inputs() {
        let policy = FailurePolicy {
            reject_empty: true,
            require_valid: false,
        };
        let reports = vec![NameReport::sanitized("123"), NameReport::sanitized("web")];
        let err = policy.check(&reports).unwrap_err().to_string();
        assert_eq!(err, "1 of 2 names rejected: 123");
    }

    #[test]
    fn require_valid_catches_overlong_names() {
        let policy = FailurePolicy {
            reject_empty: false,
            require_valid: true,
        };
        let long = "a".repeat(80);
        let reports = vec![NameReport::sanitized(&long)];
        assert!(policy.check(&reports).is_err());
    }

    #[test]
    fn plain_rendering() {
        let reports = vec![
            NameReport::sanitized("foo_bar!@#"),
            NameReport::sanitized("service1"),
        ];
        assert_eq!(
            render_sanitized(&reports, OutputFormat::Plain).unwrap(),
            "foo-bar\nservice"
        );

        let reports = vec![NameReport::validated("nginx"), NameReport::validated("")];
        assert_eq!(
            render_validated(&reports, OutputFormat::Plain).unwrap(),
            "nginx: ok\n: name must not be empty"
        );
    }

    #[test]
    fn json_rendering() {
        let reports = vec![NameReport::sanitized("App.tar.gz")];
        let out = render_sanitized(&reports, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["input"], "App.tar.gz");
        assert_eq!(value[0]["sanitized"], "app");
        assert_eq!(value[0]["valid"], true);
        assert!(value[0].get("error").is_none());
    }

    #[test]
    fn kebab_rendering() {
        let reports = vec![KebabReport::new("FooBar"), KebabReport::new("snake_case")];
        assert_eq!(
            render_kebab(&reports, OutputFormat::Plain).unwrap(),
            "foo-bar\nsnake-case"
        );

        let out = render_kebab(&reports, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["input"], "FooBar");
        assert_eq!(value[0]["kebab"], "foo-bar");
        assert_eq!(value[1]["kebab"], "snake-case");

        let out = render_kebab(&reports, OutputFormat::Yaml).unwrap();
        assert!(out.contains("kebab: foo-bar"));
    }

    #[test]
    fn yaml_rendering() {
        let reports = vec![NameReport::validated("Bad")];
        let out = render_validated(&reports, OutputFormat::Yaml).unwrap();
        assert!(out.contains("input: Bad"));
        assert!(out.contains("valid: false"));
        assert!(out.contains("error:"));
    }
}
