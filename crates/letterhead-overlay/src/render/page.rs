//! Composed page rendering

use crate::constants::{BACKGROUND_XOBJECT, CONTENT_XOBJECT, GEOMETRY_ATTRIBUTES};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use super::xobject::inherited_attribute;

/// Build one output page: the letterhead form painted first, the invoice
/// form painted over it.
///
/// MediaBox, CropBox and Rotate come from the letterhead page so its
/// geometry is kept; the invoice is placed at the origin without scaling.
///
/// # Arguments
/// * `output` - The output document
/// * `template` - The letterhead document (read-only)
/// * `template_page_id` - Letterhead page supplying geometry
/// * `page_id` - Reserved ID of the new page in `output`
/// * `background_id` - Form XObject of that letterhead page in `output`
/// * `content_id` - Form XObject of the invoice page in `output`
/// * `parent_pages_id` - The parent Pages object ID
pub fn render_composed_page(
    output: &mut Document,
    template: &Document,
    template_page_id: ObjectId,
    page_id: ObjectId,
    background_id: ObjectId,
    content_id: ObjectId,
    parent_pages_id: ObjectId,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));

    for key in GEOMETRY_ATTRIBUTES {
        if let Some(value) = inherited_attribute(template, template_page_id, key) {
            let value = resolve_direct(template, value);
            if !matches!(value, Object::Null) {
                page_dict.set(key.to_vec(), value);
            }
        }
    }
    if !page_dict.has(b"MediaBox") {
        let (width, height) = super::get_page_dimensions(template, template_page_id);
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(width),
                Object::Real(height),
            ]),
        );
    }

    let mut xobjects = Dictionary::new();
    xobjects.set(BACKGROUND_XOBJECT, Object::Reference(background_id));
    xobjects.set(CONTENT_XOBJECT, Object::Reference(content_id));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = layering_commands();
    let content_stream_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_stream_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    output.objects.insert(page_id, Object::Dictionary(page_dict));
    Ok(page_id)
}

/// Content stream painting the letterhead, then the invoice on top.
///
/// Each form runs in its own graphics state so neither leaks transforms or
/// colours into the other.
pub fn layering_commands() -> String {
    format!(
        "q /{} Do Q\nq /{} Do Q\n",
        BACKGROUND_XOBJECT, CONTENT_XOBJECT
    )
}

/// Geometry values are copied by value; a reference would point into the
/// letterhead document, not the output.
fn resolve_direct(doc: &Document, obj: &Object) -> Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).cloned().unwrap_or(Object::Null),
        _ => obj.clone(),
    }
}
