use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub sender: String,
    pub smtp_pass: String,
    pub http_port: u16,
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let smtp_host = env::var("SMTP_SERVER").unwrap_or_else(|_| "smtp.zoho.eu".to_string());

    let smtp_port = match env::var("SMTP_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse SMTP_PORT: {}", e))?,
        Err(_) => 587,
    };

    let sender = env::var("EMAIL").unwrap_or_else(|_| "kontakt@excessus.de".to_string());

    let smtp_pass =
        env::var("PASSWORD").map_err(|_| "PASSWORD environment variable is required")?;

    let http_port = match env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse PORT: {}", e))?,
        Err(_) => 5000,
    };

    Ok(Config {
        smtp_host,
        smtp_port,
        sender,
        smtp_pass,
        http_port,
    })
}
