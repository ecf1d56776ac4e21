//! Target resolution: map an address to an existing page id.

use crate::desired::PageAddress;
use crate::store::{PageStore, StoreError};

/// Resolve `address` to the id of an existing page.
///
/// An explicit id is trusted without a lookup; the caller asserts it is
/// authoritative. A path is looked up together with `locale`. `Ok(None)`
/// means no page exists at the addressed location — the caller routes that to
/// the create (or delete no-op) path.
///
/// # Errors
///
/// Lookup failures other than not-found propagate unchanged; they must never
/// be mistaken for "does not exist".
pub fn resolve<S: PageStore>(
    store: &S,
    address: &PageAddress,
    locale: &str,
) -> Result<Option<i64>, StoreError> {
    match address {
        PageAddress::Id(id) => Ok(Some(*id)),
        PageAddress::Path(path) => match store.fetch_page_by_path(path, locale) {
            Ok(page) => Ok(Some(page.id)),
            Err(StoreError::NotFound) => Ok(None),
            Err(err) => Err(err),
        },
    }
}
