//! Parameters of the read operations that only take the instance id.

use crate::operation::{
	GET_DR_GRS_LOCATION_PAIR, GET_DR_LOCATIONS, GET_DR_MANAGED_VM, GET_DR_SUMMARY, GET_LAST_OPERATION,
	OperationDescriptor, OperationParams, ParamValues,
};
use crate::params::impl_common_setters;
use serde::{Deserialize, Serialize};

macro_rules! instance_read_params {
	($(#[$doc:meta])* $params:ident, $descriptor:ident) => {
		$(#[$doc])*
		#[serde_with::skip_serializing_none]
		#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
		#[serde(rename_all = "camelCase")]
		pub struct $params {
			/// The service instance id.
			pub instance_id: Option<String>,
			pub accept_language: Option<String>,
			#[serde(default, skip_serializing_if = "Vec::is_empty")]
			pub headers: Vec<(String, String)>,
		}

		impl $params {
			pub fn new(instance_id: impl Into<String>) -> Self {
				Self {
					instance_id: Some(instance_id.into()),
					..Default::default()
				}
			}
		}

		impl_common_setters!($params);

		impl OperationParams for $params {
			fn descriptor() -> &'static OperationDescriptor {
				&$descriptor
			}

			fn param_values(&self) -> ParamValues {
				ParamValues::new()
					.with("instanceId", &self.instance_id)
					.with("acceptLanguage", &self.accept_language)
			}

			fn header_overrides(&self) -> &[(String, String)] {
				&self.headers
			}
		}
	};
}

instance_read_params!(
	/// Parameters of `getDrGrsLocationPair`: the GRS location pairs of the instance.
	GetDrGrsLocationPairParams,
	GET_DR_GRS_LOCATION_PAIR
);

instance_read_params!(
	/// Parameters of `getDrLocations`: the disaster recovery locations.
	GetDrLocationsParams,
	GET_DR_LOCATIONS
);

instance_read_params!(
	/// Parameters of `getDrManagedVm`: the virtual machines managed for DR.
	GetDrManagedVmParams,
	GET_DR_MANAGED_VM
);

instance_read_params!(
	/// Parameters of `getDrSummary`: orchestrator and service summary.
	GetDrSummaryParams,
	GET_DR_SUMMARY
);

instance_read_params!(
	/// Parameters of `getLastOperation`: status of the last (asynchronous) operation.
	GetLastOperationParams,
	GET_LAST_OPERATION
);
