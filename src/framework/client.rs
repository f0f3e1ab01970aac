//! # Generic Client
//!
//! [`ResourceClient<T>`] performs the requests every resource type shares:
//! fetch one object by id, fetch a list, and follow pagination. The typed
//! clients in [`crate::clients`] wrap it and add the resource-specific calls.

use super::config::ClientConfig;
use super::error::{ClientError, Result};
use super::resource::Resource;
use super::transport::{Response, Transport};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Resources of one type, in the order the API returned them.
///
/// Built either from a bare JSON array or from a paginated page of the form
/// `{"count": n, "next": url, "previous": url, "results": [...]}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    count: Option<u64>,
    next: Option<String>,
    previous: Option<String>,
}

impl<T: Resource> Collection<T> {
    pub fn from_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Self {
                items: wrap_all(items)?,
                count: None,
                next: None,
                previous: None,
            }),
            Value::Object(mut page) => {
                let results = match page.remove("results") {
                    Some(Value::Array(items)) => items,
                    _ => {
                        return Err(ClientError::UnexpectedShape(format!(
                            "{} page without a results array",
                            T::KIND
                        )))
                    }
                };
                let link = |value: Option<&Value>| value.and_then(Value::as_str).map(str::to_string);
                Ok(Self {
                    items: wrap_all(results)?,
                    count: page.get("count").and_then(Value::as_u64),
                    next: link(page.get("next")),
                    previous: link(page.get("previous")),
                })
            }
            other => Err(ClientError::UnexpectedShape(format!(
                "expected a {} list, found {}",
                T::KIND,
                other
            ))),
        }
    }
}

fn wrap_all<T: Resource>(items: Vec<Value>) -> Result<Vec<T>> {
    items.into_iter().map(T::from_value).collect()
}

impl<T> Collection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total reported by the API across all pages.
    pub fn count(&self) -> Option<u64> {
        self.count
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// A cheap, cloneable handle that issues requests for resources of type `T`.
pub struct ResourceClient<T: Resource> {
    transport: Arc<dyn Transport>,
    config: Arc<ClientConfig>,
    _resource: PhantomData<fn() -> T>,
}

impl<T: Resource> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: self.config.clone(),
            _resource: PhantomData,
        }
    }
}

impl<T: Resource> ResourceClient<T> {
    pub fn new(transport: Arc<dyn Transport>, config: Arc<ClientConfig>) -> Self {
        Self {
            transport,
            config,
            _resource: PhantomData,
        }
    }

    /// The same transport and config, pointed at another resource type.
    pub fn retarget<U: Resource>(&self) -> ResourceClient<U> {
        ResourceClient::new(self.transport.clone(), self.config.clone())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{api_root}{endpoint}/{segments...}/`
    pub fn path(&self, segments: &[&str]) -> String {
        let mut all = Vec::with_capacity(segments.len() + 1);
        all.push(T::ENDPOINT);
        all.extend_from_slice(segments);
        self.config.api_path(&all)
    }

    /// The detail URL of `resource`: its own `url` field, or one built from its id.
    pub fn detail_url(&self, resource: &T) -> Result<String> {
        if let Some(url) = resource.url() {
            return Ok(url.to_string());
        }
        let id = resource.id().ok_or_else(|| ClientError::missing(T::KIND, "id"))?;
        Ok(self.path(&[&id.to_string()]))
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        debug!("GET");
        self.transport.get(path).await
    }

    #[instrument(skip(self, body), fields(kind = T::KIND))]
    pub async fn post(&self, path: &str, body: Option<String>) -> Result<Response> {
        debug!(has_body = body.is_some(), "POST");
        self.transport.post(path, body).await
    }

    /// Fetches one object by id.
    pub async fn find(&self, id: u64) -> Result<T> {
        let response = self.get(&self.path(&[&id.to_string()])).await?;
        T::parse(&response.body)
    }

    /// Fetches one page (or bare list) of objects from `path`.
    pub async fn list(&self, path: &str) -> Result<Collection<T>> {
        let response = self.get(path).await?;
        self.collection_for(&response.body)
    }

    /// Fetches every object of this type, following `next` links.
    pub async fn all(&self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(self.path(&[]));
        let mut pages = 0;
        while let Some(path) = next.take() {
            if pages == self.config.max_pages {
                debug!(pages, "Page limit reached");
                break;
            }
            let page = self.list(&path).await?;
            pages += 1;
            next = page.next_page().map(str::to_string);
            items.extend(page);
        }
        Ok(items)
    }

    pub fn collection_for(&self, body: &str) -> Result<Collection<T>> {
        Collection::from_body(body)
    }
}
