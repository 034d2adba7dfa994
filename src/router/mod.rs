// Intent routing
//
// One classify-then-lookup transaction per request. Nothing survives
// across requests; the catalog is read-only shared state.

use std::sync::Arc;

use crate::catalog::{Role, RouteCatalog};
use crate::classifier::{ClassifyError, IntentClassifier};

/// Outcome of one routing attempt.
///
/// Failure kinds are kept distinct so callers and tests can tell an
/// unrecognized intent from a broken upstream or a garbled completion,
/// even where the HTTP surface presents them alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Classification matched a catalog entry.
    Resolved { route: &'static str, role: Role },
    /// The model answered, but with a role or module the catalogs don't know.
    Unrecognized,
    /// The completion service call failed.
    Upstream,
    /// The completion text was not parseable classification JSON.
    Malformed,
}

/// Turns free-text user input into a resolved route via external
/// classification and catalog lookup.
pub struct IntentRouter {
    catalog: Arc<RouteCatalog>,
    classifier: Arc<dyn IntentClassifier>,
}

impl IntentRouter {
    pub fn new(catalog: Arc<RouteCatalog>, classifier: Arc<dyn IntentClassifier>) -> Self {
        Self {
            catalog,
            classifier,
        }
    }

    /// Resolve a user query to a route.
    ///
    /// Never fails: classification errors are logged and folded into the
    /// non-resolved outcome variants.
    pub async fn resolve(&self, query: &str) -> RouteOutcome {
        let classification = match self.classifier.classify(query).await {
            Ok(classification) => classification,
            Err(ClassifyError::Upstream(reason)) => {
                tracing::error!(%reason, "Classification call failed");
                return RouteOutcome::Upstream;
            }
            Err(ClassifyError::Malformed(reason)) => {
                tracing::error!(%reason, "Unparseable classification output");
                return RouteOutcome::Malformed;
            }
        };

        let Some(role) = Role::parse(&classification.role) else {
            tracing::info!(role = %classification.role, "Classified role is not in the catalog");
            return RouteOutcome::Unrecognized;
        };

        match self.catalog.resolve(role, &classification.module) {
            Some(entry) => {
                tracing::info!(%role, module = %entry.name, route = %entry.path, "Resolved route");
                RouteOutcome::Resolved {
                    route: entry.path,
                    role,
                }
            }
            None => {
                tracing::info!(%role, module = %classification.module, "Classified module is not in the catalog");
                RouteOutcome::Unrecognized
            }
        }
    }
}
