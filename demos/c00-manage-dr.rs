//! Deploys the DR orchestrator, then follows the asynchronous operation.
//!
//! Configure with `DR_AUTOMATION_SERVICE_URL`, `DR_AUTOMATION_SERVICE_AUTH_TYPE` (e.g., `bearerToken`)
//! and `DR_AUTOMATION_SERVICE_BEARER_TOKEN`, plus `DR_INSTANCE_ID` and `DR_WORKSPACE_ID`.

use dr_automation::DrAutomationService;
use dr_automation::params::{CreateManageDrParams, GetLastOperationParams, ListEventsParams};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const MAX_POLLS: u32 = 30;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::new("dr_automation=debug"))
		.without_time()
		.init();

	let instance_id = std::env::var("DR_INSTANCE_ID")?;
	let workspace_id = std::env::var("DR_WORKSPACE_ID")?;

	let service = DrAutomationService::new_instance()?;
	service.enable_retries();

	println!("\n--- Create Manage DR ---");
	let params = CreateManageDrParams::new(
		&instance_id,
		"dal10",
		"s922",
		"off-premises",
		"drautomationprimary",
		"EverytimeNewPassword@1",
		&workspace_id,
	)
	.with_orchestrator_ha(false)
	.with_tier("tier1")
	.with_accepts_incomplete(true);
	let res = service.create_manage_dr(params).await?;
	println!("status: {}\n{:#}", res.status, res.result);

	println!("\n--- Last Operation ---");
	for poll in 1..=MAX_POLLS {
		let res = service
			.get_last_operation(GetLastOperationParams::new(&instance_id))
			.await?;
		let status = res.result.get("status").and_then(|v| v.as_str()).unwrap_or_default();
		println!("poll {poll}: {status}");
		if !status.eq_ignore_ascii_case("in progress") {
			println!("{:#}", res.result);
			break;
		}
		tokio::time::sleep(Duration::from_secs(20)).await;
	}

	println!("\n--- Events ---");
	let res = service.list_events(ListEventsParams::new(&instance_id)).await?;
	println!("{:#}", res.result);

	Ok(())
}
