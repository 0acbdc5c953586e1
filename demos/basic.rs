//! Basic example demonstrating the ThousandEyes API client.
//!
//! Run with:
//! ```
//! THOUSANDEYES_API_TOKEN=your-token cargo run --example basic
//! ```

use thousandeyes::{BgpTest, Create, Delete, Get, ThousandEyesClient, Update};

#[tokio::main]
async fn main() -> thousandeyes::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating ThousandEyes client...");
    let client = ThousandEyesClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // Define a BGP trace test
    println!("\n--- Creating BGP Test ---");
    let mut definition = BgpTest::new("example prefix watch", "192.0.2.0/24");
    definition.enabled = Some(true);
    definition.use_public_bgp = Some(true);
    definition.include_covered_prefixes = Some(false);
    definition.add_alert_rule(9);

    let created = BgpTest::create(&client, &definition).await?;
    let id = created.test_id.expect("server assigns an ID");
    println!("Created test {id}");
    println!("  Created by: {}", created.created_by.as_deref().unwrap_or("unknown"));
    println!("  Created at: {}", created.created_date.as_deref().unwrap_or("unknown"));

    // Fetch it back
    println!("\n--- Fetching Test ---");
    let test = BgpTest::get(&client, id).await?;
    println!("Test: {}", test.test_name.as_deref().unwrap_or("unnamed"));
    println!("  Prefix: {}", test.prefix.as_deref().unwrap_or("unset"));
    println!("  Enabled: {}", test.is_enabled());

    if let Some(monitors) = &test.bgp_monitors {
        println!("  Monitors: {}", monitors.len());
        for monitor in monitors.iter().take(5) {
            println!(
                "    - {} ({})",
                monitor.monitor_name.as_deref().unwrap_or("unknown"),
                monitor.monitor_type.as_deref().unwrap_or("unknown"),
            );
        }
    }

    // Update the description only; unset fields stay untouched server-side
    println!("\n--- Updating Test ---");
    let changes = BgpTest {
        description: Some("managed by thousandeyes-rs demo".to_string()),
        ..BgpTest::default()
    };
    let updated = BgpTest::update(&client, id, &changes).await?;
    println!("Description: {}", updated.description.as_deref().unwrap_or("unset"));

    // Clean up
    println!("\n--- Deleting Test ---");
    BgpTest::delete(&client, id).await?;
    println!("Deleted test {id}");

    println!("\nDone!");
    Ok(())
}
