//! Reads bot analytics cookie values and a bot category exception.
//!
//! To run this example:
//! ```bash
//! export BOTMAN_BASE_URL="https://api.example.test"
//! export BOTMAN_TIMEOUT_SECS=10  # Optional, defaults to 30
//! cargo run --example fetch_bot_data -- 43253 15 AAAA_81230
//! ```

use botman_client::{BotmanClient, ClientConfig, ClientError, GetBotCategoryExceptionRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    const USAGE: &str = "usage: fetch_bot_data <config_id> <version> <security_policy_id>";

    let mut args = std::env::args().skip(1);
    let config_id: i64 = args.next().ok_or(USAGE)?.parse()?;
    let version: i64 = args.next().ok_or(USAGE)?.parse()?;
    let security_policy_id = args.next().ok_or(USAGE)?;

    let client = BotmanClient::from_config(ClientConfig::from_env()?)?;

    println!("=== Bot analytics cookie values ===\n");
    let values = client.get_bot_analytics_cookie_values().await?;
    println!("{}\n", serde_json::to_string_pretty(&values)?);

    println!("=== Bot category exception ===\n");
    let params = GetBotCategoryExceptionRequest {
        config_id,
        version,
        security_policy_id,
    };
    match client.get_bot_category_exception(params).await {
        Ok(exception) => println!("{}", serde_json::to_string_pretty(&exception)?),
        Err(ClientError::Validation(errs)) => {
            eprintln!("{USAGE} ({errs})");
        }
        Err(ClientError::Api(api)) => {
            eprintln!("server rejected the request: {} ({})", api.title, api.status);
        }
        Err(other) => return Err(other.into()),
    }

    Ok(())
}
