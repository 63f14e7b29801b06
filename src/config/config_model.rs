use crate::config::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub user_secret: UserSecret,
    pub market: Market,
    pub stage: Stage,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct UserSecret {
    pub secret: String,
    pub ttl_seconds: i64,
}

/// Knobs of the in-memory marketplace.
#[derive(Debug, Clone)]
pub struct Market {
    pub mock_api_delay_ms: u64,
    pub annual_subscription_fee_minor: i64,
    pub seed_demo_data: bool,
    pub demo_seller_password: String,
}
