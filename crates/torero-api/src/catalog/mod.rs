//! Resource mappers over torero subcommands.
//!
//! [`ToreroCatalog`] is the only consumer of the invoker: it lists resources
//! via `torero get <kind> --raw`, deserializes the JSON output into typed
//! models, and runs execution subcommands. Filtering and pagination are pure
//! in-memory operations. There is no caching anywhere; every
//! call re-invokes the CLI so responses always reflect torero's current
//! state.

mod filter;

pub use filter::{filter_resources, filter_secrets, filter_services, paginate, unique_sorted, ListParams};

use std::sync::Arc;
use std::time::Duration;

use torero_exec::{ExecError, RunOutput, ToreroInvoker};

use crate::config::AppConfig;
use crate::models::{Resource, Secret, Service};

/// Mapper layer between the REST surface and the torero CLI.
#[derive(Debug, Clone)]
pub struct ToreroCatalog {
    invoker: Arc<ToreroInvoker>,
    list_timeout: Duration,
    execution_timeout: Duration,
}

impl ToreroCatalog {
    /// Build a catalog from the application configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            invoker: Arc::new(ToreroInvoker::with_binary(&config.binary)),
            list_timeout: Duration::from_secs(config.list_timeout),
            execution_timeout: Duration::from_secs(config.execution_timeout),
        }
    }

    /// The underlying invoker (used by the health probe).
    pub fn invoker(&self) -> &ToreroInvoker {
        &self.invoker
    }

    /// Run `torero get <kind> --raw` and deserialize the listing.
    async fn list<T: serde::de::DeserializeOwned>(&self, kind: &str) -> Result<Vec<T>, ExecError> {
        let value = self
            .invoker
            .run_json(&["get", kind, "--raw"], self.list_timeout)
            .await?;

        serde_json::from_value(value).map_err(|e| ExecError::InvalidOutput(e.to_string()))
    }

    /// List all registered services, in torero's own ordering.
    pub async fn services(&self) -> Result<Vec<Service>, ExecError> {
        let services = self.list("services").await?;
        tracing::debug!(count = services.len(), "Retrieved services from torero");
        Ok(services)
    }

    /// Fetch a single service by name.
    pub async fn service(&self, name: &str) -> Result<Option<Service>, ExecError> {
        Ok(self.services().await?.into_iter().find(|s| s.name == name))
    }

    /// Fetch the full torero description of a service.
    pub async fn describe_service(&self, name: &str) -> Result<serde_json::Value, ExecError> {
        self.invoker
            .run_json(&["describe", "services", name, "--raw"], self.list_timeout)
            .await
    }

    /// List all registered decorators.
    pub async fn decorators(&self) -> Result<Vec<Resource>, ExecError> {
        self.list("decorators").await
    }

    /// Fetch a single decorator by name.
    pub async fn decorator(&self, name: &str) -> Result<Option<Resource>, ExecError> {
        Ok(self.decorators().await?.into_iter().find(|d| d.name == name))
    }

    /// List all registered repositories.
    pub async fn repositories(&self) -> Result<Vec<Resource>, ExecError> {
        self.list("repositories").await
    }

    /// Fetch a single repository by name.
    pub async fn repository(&self, name: &str) -> Result<Option<Resource>, ExecError> {
        Ok(self
            .repositories()
            .await?
            .into_iter()
            .find(|r| r.name == name))
    }

    /// List all registered registries.
    pub async fn registries(&self) -> Result<Vec<Resource>, ExecError> {
        self.list("registries").await
    }

    /// Fetch a single registry by name.
    pub async fn registry(&self, name: &str) -> Result<Option<Resource>, ExecError> {
        Ok(self.registries().await?.into_iter().find(|r| r.name == name))
    }

    /// List all secrets, metadata only. Redaction happens here so no caller
    /// can observe an unredacted secret.
    pub async fn secrets(&self) -> Result<Vec<Secret>, ExecError> {
        let secrets: Vec<Secret> = self.list("secrets").await?;
        Ok(secrets.into_iter().map(Secret::redacted).collect())
    }

    /// Fetch a single secret by name, metadata only.
    pub async fn secret(&self, name: &str) -> Result<Option<Secret>, ExecError> {
        Ok(self.secrets().await?.into_iter().find(|s| s.name == name))
    }

    /// Run an ansible-playbook service.
    pub async fn run_ansible_playbook(&self, name: &str) -> Result<RunOutput, ExecError> {
        self.execute(&["run", "service", "ansible-playbook", "execute", name])
            .await
    }

    /// Run a python-script service.
    pub async fn run_python_script(&self, name: &str) -> Result<RunOutput, ExecError> {
        self.execute(&["run", "service", "python-script", "execute", name])
            .await
    }

    /// Apply an opentofu-plan service.
    pub async fn apply_opentofu_plan(&self, name: &str) -> Result<RunOutput, ExecError> {
        self.execute(&["run", "service", "opentofu-plan", "apply", name])
            .await
    }

    /// Destroy an opentofu-plan service.
    pub async fn destroy_opentofu_plan(&self, name: &str) -> Result<RunOutput, ExecError> {
        self.execute(&["run", "service", "opentofu-plan", "destroy", name])
            .await
    }

    /// Run an execution subcommand under the execution deadline.
    ///
    /// Any exit code is a valid outcome here: the caller reports torero's
    /// exit code verbatim instead of translating it to an HTTP error.
    async fn execute(&self, args: &[&str]) -> Result<RunOutput, ExecError> {
        tracing::info!(?args, "Executing torero service");
        self.invoker.run(args, self.execution_timeout).await
    }
}
