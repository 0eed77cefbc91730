//! Reads the DR state of a service instance.
//!
//! The service is configured from the environment (see `c00-manage-dr`) and `DR_INSTANCE_ID`.

use dr_automation::DrAutomationService;
use dr_automation::params::{
	GetDrGrsLocationPairParams, GetDrLocationsParams, GetDrManagedVmParams, GetDrSummaryParams,
	GetPowervsWorkspacesParams,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let instance_id = std::env::var("DR_INSTANCE_ID")?;
	let service = DrAutomationService::new_instance()?;

	println!("\n--- DR Summary ---");
	let res = service
		.get_dr_summary(GetDrSummaryParams::new(&instance_id).with_accept_language("en-US"))
		.await?;
	println!("{:#}", res.result);

	println!("\n--- GRS Location Pairs ---");
	let res = service
		.get_dr_grs_location_pair(GetDrGrsLocationPairParams::new(&instance_id))
		.await?;
	println!("{:#}", res.result);

	println!("\n--- DR Locations ---");
	let res = service.get_dr_locations(GetDrLocationsParams::new(&instance_id)).await?;
	println!("{:#}", res.result);

	println!("\n--- Managed VMs ---");
	let res = service.get_dr_managed_vm(GetDrManagedVmParams::new(&instance_id)).await?;
	println!("{:#}", res.result);

	println!("\n--- PowerVS Workspaces (dal10) ---");
	let res = service
		.get_powervs_workspaces(GetPowervsWorkspacesParams::new(&instance_id).with_location_id("dal10"))
		.await?;
	println!("{:#}", res.result);

	Ok(())
}
