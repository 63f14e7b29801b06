use std::{env, str::FromStr};

use anyhow::{Context, Result};

use crate::{
    config::{
        config_model::{DotEnvyConfig, Market, Server, UserSecret},
        stage::Stage,
    },
    domain::value_objects::payments::DEFAULT_ANNUAL_FEE_MINOR,
};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: required("SERVER_PORT")?,
        body_limit: optional("SERVER_BODY_LIMIT", 10)?,
        timeout: optional("SERVER_TIMEOUT", 30)?,
    };

    let user_secret = get_user_secret()?;

    let market = Market {
        mock_api_delay_ms: optional("MOCK_API_DELAY_MS", 0)?,
        annual_subscription_fee_minor: optional(
            "ANNUAL_SUBSCRIPTION_FEE_MINOR",
            DEFAULT_ANNUAL_FEE_MINOR,
        )?,
        seed_demo_data: env::var("SEED_DEMO_DATA")
            .ok()
            .and_then(|raw| parse_bool(&raw))
            .unwrap_or(true),
        demo_seller_password: env::var("DEMO_SELLER_PASSWORD")
            .unwrap_or_else(|_| "fellah123".to_string()),
    };

    Ok(DotEnvyConfig {
        server,
        user_secret,
        market,
        stage: get_stage(),
    })
}

pub fn get_stage() -> Stage {
    dotenvy::dotenv().ok();

    let stage_str = env::var("STAGE").unwrap_or("".to_string());
    Stage::try_from(&stage_str).unwrap_or_default()
}

pub fn get_user_secret() -> Result<UserSecret> {
    dotenvy::dotenv().ok();

    Ok(UserSecret {
        secret: env::var("JWT_USER_SECRET").context("JWT_USER_SECRET is invalid")?,
        ttl_seconds: optional("JWT_TTL_SECONDS", 86_400)?,
    })
}

fn required<T>(key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env::var(key)
        .with_context(|| format!("{key} is invalid"))?
        .parse()
        .with_context(|| format!("{key} is invalid"))
}

fn optional<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} is invalid")),
        _ => Ok(default),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool(" Yes "), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn optional_falls_back_when_unset() {
        let value: u64 = optional("SOUQ_FELLAH_TEST_UNSET_KEY", 42).unwrap();
        assert_eq!(value, 42);
    }
}
