//! Page annotations (links, form widgets, notes) carried onto composed pages

use crate::types::Result;
use lopdf::{Document, Object, ObjectId};
use std::collections::HashMap;

/// Copy the annotations of a source page into `output`.
///
/// `page_map` sends source page IDs to output page IDs, so `/P` entries and
/// link destinations point at composed pages instead of dragging the source
/// page tree along. The current source page always maps to `output_page_id`.
///
/// Annotation dictionaries are copied fresh on every call, so a letterhead
/// page reused under several invoice pages gives each of them its own
/// annotations; resources already in `cache` are shared.
pub fn copy_page_annotations(
    output: &mut Document,
    source: &Document,
    source_page_id: ObjectId,
    output_page_id: ObjectId,
    page_map: &HashMap<ObjectId, ObjectId>,
    cache: &HashMap<ObjectId, ObjectId>,
) -> Result<Vec<Object>> {
    let page_dict = source.get_dictionary(source_page_id)?;
    let annots = match page_dict.get(b"Annots") {
        Ok(Object::Reference(id)) => source.get_object(*id)?,
        Ok(obj) => obj,
        Err(_) => return Ok(Vec::new()),
    };
    let Object::Array(items) = annots else {
        return Ok(Vec::new());
    };

    let mut page_cache = cache.clone();
    page_cache.extend(page_map);
    page_cache.insert(source_page_id, output_page_id);

    let copied: Vec<Object> = items
        .iter()
        .map(|item| super::copy_object_deep(output, source, item, &mut page_cache))
        .collect::<Result<_>>()?;

    if !copied.is_empty() {
        log::debug!(
            "Copied {} annotation(s) from page {:?}",
            copied.len(),
            source_page_id
        );
    }
    Ok(copied)
}
