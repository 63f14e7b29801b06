use std::fmt::Display;

use anyhow::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Local,
    Development,
    Production,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stage = match self {
            Stage::Local => "Local",
            Stage::Development => "Development",
            Stage::Production => "Production",
        };
        f.write_str(stage)
    }
}

impl TryFrom<&String> for Stage {
    type Error = anyhow::Error;

    fn try_from(stage: &String) -> Result<Self> {
        match stage.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Stage::Local),
            "development" | "dev" => Ok(Stage::Development),
            "production" | "prod" => Ok(Stage::Production),
            other => anyhow::bail!("unknown stage: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_stages_case_insensitively() {
        assert_eq!(Stage::try_from(&"Production".to_string()).unwrap(), Stage::Production);
        assert_eq!(Stage::try_from(&"dev".to_string()).unwrap(), Stage::Development);
    }

    #[test]
    fn unknown_stage_falls_back_to_local() {
        let stage = Stage::try_from(&String::new()).unwrap_or_default();
        assert_eq!(stage, Stage::Local);
    }
}
