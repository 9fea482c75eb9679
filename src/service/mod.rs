// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Request orchestration.
//!
//! A GET request flows through the components in a fixed order:
//!
//! ```text
//! options -> compile -> working directory -> arguments -> engine -> collect -> envelope
//! ```
//!
//! Protocol errors and validation failures end the request early with an
//! ERROR envelope. Workspace, engine and output faults are returned as `Err`.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::catalog::ResourceCatalog;
use crate::compiler::ConfigurationCompiler;
use crate::config::{
    AdapterConfig, DecodeOptions, OutputConfig, WorkspaceConfig, RECOGNIZED_PARAMETERS,
};
use crate::engine::{ArgumentVectorBuilder, CommandEngine, ProcessAdapter};
use crate::envelope::discriminator::GET_URI;
use crate::envelope::{Discriminator, Payload, Request, Response, ServiceMetadata, SERVICE_NAME};
use crate::errors::{ProtocolError, ServiceFault};
use crate::observability::messages::compiler::{ConfigurationCompiled, ValidationFailed};
use crate::observability::messages::request::{
    ErrorPassedThrough, ParameterIgnored, RequestReceived, RequestRejected,
};
use crate::observability::messages::StructuredLog;
use crate::output::OutputCollector;
use crate::traits::{DecodeEngine, Processor};
use crate::workspace::WorkingDirectory;


const CONFIG_FILE_STEM: &str = "config";
const CONFIG_FILE_EXTENSION: &str = "xml";

pub struct DecodeService {
    catalog: ResourceCatalog,
    adapter: ProcessAdapter,
    collector: OutputCollector,
    output: OutputConfig,
    workspace: WorkspaceConfig,
    // held from compilation through collection
    gate: Mutex<()>,
}

impl DecodeService {
    pub fn new(config: &AdapterConfig, engine: Arc<dyn DecodeEngine>) -> Self {
        Self {
            catalog: ResourceCatalog::new(
                config.resources.lexica_root.clone(),
                config.resources.models_root.clone(),
            ),
            adapter: ProcessAdapter::new(engine, config.engine.timeout()),
            collector: OutputCollector::from_config(&config.output),
            output: config.output.clone(),
            workspace: config.workspace.clone(),
            gate: Mutex::new(()),
        }
    }

    /// Service backed by the configured external engine.
    pub fn from_config(config: &AdapterConfig) -> Self {
        Self::new(config, Arc::new(CommandEngine::from_config(&config.engine)))
    }

    pub fn metadata(&self) -> Result<Response, ServiceFault> {
        Ok(ServiceMetadata::default().into_response()?)
    }

    /// Handle one request given as JSON text and return the response as
    /// pretty-printed JSON. ERROR envelopes are returned exactly as received.
    pub async fn execute(&self, raw: &str) -> Result<String, ServiceFault> {
        if Request::is_error_envelope(raw) {
            ErrorPassedThrough { length: raw.len() }.log();
            return Ok(raw.to_string());
        }

        let request = match Request::from_json(raw) {
            Ok(request) => request,
            Err(error) => return Ok(reject(error).to_json()?),
        };

        Ok(self.process(request).await?.to_json()?)
    }

    async fn decode(&self, documents: Payload, options: DecodeOptions) -> Result<Response, ServiceFault> {
        let _gate = self.gate.lock().await;

        let document = match ConfigurationCompiler::new(&self.catalog).compile(&options) {
            Ok(document) => document,
            Err(failure) => {
                ValidationFailed {
                    kind: failure.kind(),
                    failure: &failure,
                }
                .log();
                return Ok(Response::error(failure.to_string()));
            }
        };
        ConfigurationCompiled {
            columns: document.tsv.as_ref().map_or(0, Vec::len),
            lexica: document.lexica.as_ref().map_or(0, Vec::len),
            models: document.models.as_ref().map_or(0, Vec::len),
        }
        .log();

        let workspace = WorkingDirectory::create(&self.workspace).map_err(ServiceFault::Workspace)?;
        let config_path = workspace
            .write_file(CONFIG_FILE_STEM, CONFIG_FILE_EXTENSION, &document.to_xml()?)
            .map_err(ServiceFault::Workspace)?;
        let arguments = ArgumentVectorBuilder::new(&workspace, &self.output)
            .build(&documents, options.format.as_deref(), &config_path)
            .map_err(ServiceFault::Workspace)?;

        let printed = self.adapter.invoke(&arguments).await?;
        let map = self
            .collector
            .collect(workspace.path(), printed)
            .map_err(ServiceFault::Output)?;

        Ok(Response::success(&map)?)
    }
}

#[async_trait]
impl Processor for DecodeService {
    async fn process(&self, request: Request) -> Result<Response, ServiceFault> {
        RequestReceived {
            discriminator: request.discriminator_uri(),
            parameter_count: request.parameters.len(),
        }
        .log();

        match &request.discriminator {
            Some(Discriminator::Error) => {
                let payload = request.payload.unwrap_or_default();
                ErrorPassedThrough {
                    length: payload.to_string().len(),
                }
                .log();
                return Ok(Response {
                    discriminator: Discriminator::Error,
                    payload,
                });
            }
            Some(Discriminator::Get) => {}
            _ => {
                return Ok(reject(ProtocolError::InvalidDiscriminator {
                    expected: GET_URI.to_string(),
                    found: request.discriminator_uri().to_string(),
                }))
            }
        }

        let documents = match request.documents() {
            Ok(Some(documents)) => documents,
            Ok(None) => return Ok(reject(ProtocolError::NoInput)),
            Err(error) => return Ok(reject(error)),
        };

        for name in request
            .parameters
            .keys()
            .filter(|name| !RECOGNIZED_PARAMETERS.contains(&name.as_str()))
        {
            ParameterIgnored { name }.log();
        }
        let options = match DecodeOptions::from_parameters(&request.parameters) {
            Ok(options) => options,
            Err(error) => return Ok(reject(error)),
        };

        self.decode(documents, options).await
    }

    fn name(&self) -> &'static str {
        SERVICE_NAME
    }
}

fn reject(error: ProtocolError) -> Response {
    RequestRejected { reason: &error }.log();
    Response::error(error.to_string())
}
