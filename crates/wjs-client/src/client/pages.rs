//! Page operations against the Wiki.js GraphQL API.

use serde_json::json;
use tracing::info;
use wjs_reconcile::{NewPage, Page, PageDelta, PageStore, StoreError};

use super::WikiJsClient;
use crate::error::ClientError;
use crate::types::{MutationPayload, PagePayload};

/// Field selection shared by every operation that returns a page.
const PAGE_FIELDS: &str = "id path title description content editor isPrivate isPublished locale \
                           publishStartDate publishEndDate scriptCss scriptJs tags { tag }";

impl WikiJsClient {
    /// Fetch a page by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when no page has that id.
    pub fn fetch_page(&self, id: i64) -> Result<Page, ClientError> {
        info!("fetching page {id}");

        let query =
            format!("query ($id: Int!) {{ pages {{ single(id: $id) {{ {PAGE_FIELDS} }} }} }}");
        let data = self.graphql(&query, json!({ "id": id }))?;
        parse_page(&data, "single")
    }

    /// Fetch a page by its (path, locale) pair.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] when no page exists there.
    pub fn fetch_page_by_path(&self, path: &str, locale: &str) -> Result<Page, ClientError> {
        info!("fetching page {path} ({locale})");

        let query = format!(
            "query ($path: String!, $locale: String!) \
             {{ pages {{ singleByPath(path: $path, locale: $locale) {{ {PAGE_FIELDS} }} }} }}"
        );
        let data = self.graphql(&query, json!({ "path": path, "locale": locale }))?;
        parse_page(&data, "singleByPath")
    }

    /// Create a page from the full desired record.
    ///
    /// # Errors
    ///
    /// Returns an error when the service rejects the creation.
    pub fn create_page(&self, page: &NewPage) -> Result<Page, ClientError> {
        info!("creating page {}", page.path);

        let query = format!(
            "mutation ($content: String!, $description: String!, $editor: String!, \
             $isPrivate: Boolean!, $isPublished: Boolean!, $locale: String!, $path: String!, \
             $publishEndDate: Date, $publishStartDate: Date, $scriptCss: String, \
             $scriptJs: String, $tags: [String]!, $title: String!) \
             {{ pages {{ create(content: $content, description: $description, editor: $editor, \
             isPrivate: $isPrivate, isPublished: $isPublished, locale: $locale, path: $path, \
             publishEndDate: $publishEndDate, publishStartDate: $publishStartDate, \
             scriptCss: $scriptCss, scriptJs: $scriptJs, tags: $tags, title: $title) \
             {{ responseResult {{ succeeded errorCode message }} page {{ {PAGE_FIELDS} }} }} }} }}"
        );
        let data = self.graphql(&query, serde_json::to_value(page)?)?;

        let payload = mutation_payload(&data, "create")?;
        let created = payload.page.ok_or_else(|| ClientError::Api {
            code: None,
            message: "create returned no page".to_owned(),
        })?;
        info!("created page {} with id {}", created.path, created.id);
        Ok(created.into())
    }

    /// Apply a field delta to an existing page.
    ///
    /// Only fields present in the delta enter the variables object, so
    /// unchanged fields are never resent.
    ///
    /// # Errors
    ///
    /// Returns an error when the service rejects the update.
    pub fn update_page(&self, id: i64, delta: &PageDelta) -> Result<Page, ClientError> {
        info!("updating page {id}");

        let query = format!(
            "mutation ($id: Int!, $content: String, $description: String, $editor: String, \
             $isPrivate: Boolean, $isPublished: Boolean, $locale: String, $path: String, \
             $publishEndDate: Date, $publishStartDate: Date, $scriptCss: String, \
             $scriptJs: String, $tags: [String], $title: String) \
             {{ pages {{ update(id: $id, content: $content, description: $description, \
             editor: $editor, isPrivate: $isPrivate, isPublished: $isPublished, \
             locale: $locale, path: $path, publishEndDate: $publishEndDate, \
             publishStartDate: $publishStartDate, scriptCss: $scriptCss, scriptJs: $scriptJs, \
             tags: $tags, title: $title) \
             {{ responseResult {{ succeeded errorCode message }} page {{ {PAGE_FIELDS} }} }} }} }}"
        );
        let variables = update_variables(id, delta)?;
        let data = self.graphql(&query, variables)?;

        let payload = mutation_payload(&data, "update")?;
        let updated = payload.page.ok_or_else(|| ClientError::Api {
            code: None,
            message: "update returned no page".to_owned(),
        })?;
        Ok(updated.into())
    }

    /// Move a page to a new path and/or locale.
    ///
    /// The mutation returns no page; the caller's follow-up update is
    /// authoritative for the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error when the service rejects the move.
    pub fn move_page(&self, id: i64, path: &str, locale: &str) -> Result<(), ClientError> {
        info!("moving page {id} to {path} ({locale})");

        let query = "mutation ($id: Int!, $destinationPath: String!, $destinationLocale: String!) \
                     { pages { move(id: $id, destinationPath: $destinationPath, \
                     destinationLocale: $destinationLocale) \
                     { responseResult { succeeded errorCode message } } } }";
        let variables = json!({
            "id": id,
            "destinationPath": path,
            "destinationLocale": locale,
        });
        let data = self.graphql(query, variables)?;

        mutation_payload(&data, "move")?;
        Ok(())
    }

    /// Delete a page.
    ///
    /// # Errors
    ///
    /// Returns an error when the service rejects the deletion.
    pub fn delete_page(&self, id: i64) -> Result<(), ClientError> {
        info!("deleting page {id}");

        let query = "mutation ($id: Int!) { pages { delete(id: $id) \
                     { responseResult { succeeded errorCode message } } } }";
        let data = self.graphql(query, json!({ "id": id }))?;

        mutation_payload(&data, "delete")?;
        Ok(())
    }
}

impl PageStore for WikiJsClient {
    fn fetch_page_by_path(&self, path: &str, locale: &str) -> Result<Page, StoreError> {
        Ok(self.fetch_page_by_path(path, locale)?)
    }

    fn fetch_page(&self, id: i64) -> Result<Page, StoreError> {
        Ok(self.fetch_page(id)?)
    }

    fn create_page(&self, page: &NewPage) -> Result<Page, StoreError> {
        Ok(self.create_page(page)?)
    }

    fn update_page(&self, id: i64, delta: &PageDelta) -> Result<Page, StoreError> {
        Ok(self.update_page(id, delta)?)
    }

    fn move_page(&self, id: i64, path: &str, locale: &str) -> Result<(), StoreError> {
        Ok(self.move_page(id, path, locale)?)
    }

    fn delete_page(&self, id: i64) -> Result<(), StoreError> {
        Ok(self.delete_page(id)?)
    }
}

/// Build the update variables: the delta's present fields plus the id.
fn update_variables(id: i64, delta: &PageDelta) -> Result<serde_json::Value, ClientError> {
    let mut variables = match serde_json::to_value(delta)? {
        serde_json::Value::Object(map) => map,
        // A struct always serializes to an object.
        _ => serde_json::Map::new(),
    };
    variables.insert("id".to_owned(), json!(id));
    Ok(serde_json::Value::Object(variables))
}

/// Extract the page payload of a query, treating a null page as not found.
fn parse_page(data: &serde_json::Value, field: &str) -> Result<Page, ClientError> {
    let node = data
        .pointer(&format!("/pages/{field}"))
        .cloned()
        .unwrap_or(serde_json::Value::Null);
    if node.is_null() {
        return Err(ClientError::NotFound);
    }
    let payload: PagePayload = serde_json::from_value(node)?;
    Ok(payload.into())
}

/// Extract a mutation payload and check its `responseResult`.
fn mutation_payload(data: &serde_json::Value, field: &str) -> Result<MutationPayload, ClientError> {
    let node = data
        .pointer(&format!("/pages/{field}"))
        .cloned()
        .unwrap_or(serde_json::Value::Null);
    let payload: MutationPayload = serde_json::from_value(node)?;
    if !payload.result.succeeded {
        return Err(ClientError::Api {
            code: payload.result.error_code,
            message: payload
                .result
                .message
                .unwrap_or_else(|| format!("{field} failed")),
        });
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_update_variables_carry_only_present_fields() {
        let delta = PageDelta {
            content: Some("# New".to_owned()),
            path: Some("b".to_owned()),
            tags: Some(BTreeSet::from(["a".to_owned()])),
            ..PageDelta::default()
        };
        let variables = update_variables(7, &delta).unwrap();

        assert_eq!(
            variables,
            json!({
                "id": 7,
                "content": "# New",
                "path": "b",
                "tags": ["a"],
            })
        );
    }

    #[test]
    fn test_parse_page_null_is_not_found() {
        let data = json!({"pages": {"singleByPath": null}});
        let result = parse_page(&data, "singleByPath");
        assert!(matches!(result, Err(ClientError::NotFound)));
    }

    #[test]
    fn test_parse_page_reads_the_payload() {
        let data = json!({"pages": {"single": {
            "id": 7,
            "path": "a/b",
            "title": "Topic",
            "content": "# Topic",
            "tags": [{"tag": "docs"}]
        }}});
        let page = parse_page(&data, "single").unwrap();
        assert_eq!(page.id, 7);
        assert_eq!(page.tags, BTreeSet::from(["docs".to_owned()]));
    }

    #[test]
    fn test_mutation_payload_failure_surfaces_code_and_message() {
        let data = json!({"pages": {"create": {
            "responseResult": {
                "succeeded": false,
                "errorCode": 6002,
                "message": "Page already exists"
            }
        }}});
        let result = mutation_payload(&data, "create");
        let Err(ClientError::Api { code, message }) = result else {
            panic!("expected Api error");
        };
        assert_eq!(code, Some(6002));
        assert_eq!(message, "Page already exists");
    }

    #[test]
    fn test_mutation_payload_success_passes_through() {
        let data = json!({"pages": {"move": {
            "responseResult": {"succeeded": true, "errorCode": 0, "message": "ok"}
        }}});
        let payload = mutation_payload(&data, "move").unwrap();
        assert!(payload.result.succeeded);
        assert!(payload.page.is_none());
    }
}
