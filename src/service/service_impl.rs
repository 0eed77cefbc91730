use crate::Result;
use crate::operation::{OperationParams, build_request};
use crate::params::{
	CreateManageDrParams, GetDrGrsLocationPairParams, GetDrLocationsParams, GetDrManagedVmParams, GetDrSummaryParams,
	GetEventParams, GetLastOperationParams, GetMachineTypeParams, GetPowervsWorkspacesParams, ListEventsParams,
	UpdateApikeyParams,
};
use crate::service::DrAutomationService;
use crate::webc::WebResponse;
use tracing::debug;

/// Invoker
impl DrAutomationService {
	/// Builds, authenticates and sends the request of `params`.
	///
	/// Parameter validation happens first; on failure nothing reaches the
	/// authenticator or the transport.
	pub async fn invoke<P: OperationParams + Sync>(&self, params: &P) -> Result<WebResponse> {
		let mut request = build_request(&self.inner.endpoint, params)?;

		self.inner.authenticator.authenticate(&mut request).await?;

		let retries_enabled = self.is_retries_enabled();
		debug!(
			operation = request.operation,
			method = %request.method,
			url = %request.url,
			retries_enabled,
			"dispatching request"
		);

		let response = self.inner.transport.send(request, retries_enabled).await?;

		Ok(response)
	}
}

// region:    --- API Key

/// API Key
impl DrAutomationService {
	/// Updates the API key of the service instance.
	/// `PUT /drautomation/v1/apikey/{instance_id}`
	pub async fn update_apikey(&self, params: UpdateApikeyParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}
}

// endregion: --- API Key

// region:    --- DR Resources

/// DR Resources
impl DrAutomationService {
	/// `GET /drautomation/v1/dr_grs_location_pairs/{instance_id}`
	pub async fn get_dr_grs_location_pair(&self, params: GetDrGrsLocationPairParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}

	/// `GET /drautomation/v1/dr_locations/{instance_id}`
	pub async fn get_dr_locations(&self, params: GetDrLocationsParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}

	/// `GET /drautomation/v1/dr_managed_vms/{instance_id}`
	pub async fn get_dr_managed_vm(&self, params: GetDrManagedVmParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}

	/// `GET /drautomation/v1/dr_summary/{instance_id}`
	pub async fn get_dr_summary(&self, params: GetDrSummaryParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}

	/// Machine types available in the primary (and optional standby) workspace.
	/// `GET /drautomation/v1/machinetypes/{instance_id}`
	pub async fn get_machine_type(&self, params: GetMachineTypeParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}

	/// `GET /drautomation/v1/powervs_workspaces/{instance_id}`
	pub async fn get_powervs_workspaces(&self, params: GetPowervsWorkspacesParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}
}

// endregion: --- DR Resources

// region:    --- Manage DR

/// Manage DR
impl DrAutomationService {
	/// Starts the deployment of the DR orchestrator.
	/// `POST /drautomation/v1/manage_dr/{instance_id}`
	///
	/// The service completes it asynchronously; follow up with
	/// `get_last_operation` and `list_events`.
	pub async fn create_manage_dr(&self, params: CreateManageDrParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}

	/// `GET /drautomation/v1/last_operation/{instance_id}`
	pub async fn get_last_operation(&self, params: GetLastOperationParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}
}

// endregion: --- Manage DR

// region:    --- Events

/// Events
impl DrAutomationService {
	/// `GET /drautomation/v1/service_instances/{instance_id}/events`
	pub async fn list_events(&self, params: ListEventsParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}

	/// `GET /drautomation/v1/service_instances/{instance_id}/events/{event_id}`
	pub async fn get_event(&self, params: GetEventParams) -> Result<WebResponse> {
		self.invoke(&params).await
	}
}

// endregion: --- Events
