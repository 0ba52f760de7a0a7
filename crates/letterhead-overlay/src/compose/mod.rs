//! Letterhead composition - layering invoice pages over letterhead pages
//!
//! 1. Map every invoice page to a letterhead page
//! 2. Import each letterhead page once as a Form XObject
//! 3. Import each invoice page as a Form XObject
//! 4. Emit one output page per invoice page, letterhead underneath
//! 5. Carry annotations of both pages over, the invoice's on top

mod io;

pub use io::{load_pdf, load_pdf_bytes, save_pdf, save_pdf_bytes};

use crate::render::{copy_page_annotations, create_page_xobject, render_composed_page};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Result of a composition run
#[derive(Debug, Clone)]
pub struct ComposedDocument {
    pub document: Document,
    /// Letterhead page index under each output page, in page order. Empty
    /// when there was no letterhead and the invoice was passed through.
    pub background_pages: Vec<usize>,
}

impl ComposedDocument {
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    pub fn is_passthrough(&self) -> bool {
        self.background_pages.is_empty()
    }

    /// Serialize to PDF bytes
    pub fn to_bytes(&mut self) -> Result<Vec<u8>> {
        save_pdf_bytes(&mut self.document)
    }
}

/// Letterhead page used under invoice page `content_index`.
///
/// Once the letterhead runs out its last page is repeated; extra letterhead
/// pages are never used. Returns `None` for an empty letterhead.
pub fn template_page_index(content_index: usize, template_pages: usize) -> Option<usize> {
    if template_pages == 0 {
        None
    } else {
        Some(content_index.min(template_pages - 1))
    }
}

/// Compose in a blocking task
pub async fn compose_async(content: &Document, template: &Document) -> Result<ComposedDocument> {
    let content = content.clone();
    let template = template.clone();

    tokio::task::spawn_blocking(move || compose(&content, &template)).await?
}

/// Layer every invoice page over its letterhead page.
///
/// An invoice without pages is an error. A letterhead without pages leaves
/// the invoice unchanged. Neither input is modified.
pub fn compose(content: &Document, template: &Document) -> Result<ComposedDocument> {
    let content_ids: Vec<ObjectId> = content.get_pages().values().copied().collect();
    if content_ids.is_empty() {
        return Err(OverlayError::EmptyContent);
    }

    let template_ids: Vec<ObjectId> = template.get_pages().values().copied().collect();
    if template_ids.is_empty() {
        log::info!("Letterhead has no pages, passing invoice through unchanged");
        return Ok(ComposedDocument {
            document: content.clone(),
            background_pages: Vec::new(),
        });
    }

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(content_ids.len());
    let mut background_pages = Vec::with_capacity(content_ids.len());

    let output_page_ids: Vec<ObjectId> =
        content_ids.iter().map(|_| output.new_object_id()).collect();
    // Source page -> output page, for annotation back-references and link
    // destinations. A letterhead page maps to the first output page over it.
    let content_pages: HashMap<ObjectId, ObjectId> = content_ids
        .iter()
        .copied()
        .zip(output_page_ids.iter().copied())
        .collect();
    let template_pages: HashMap<ObjectId, ObjectId> = template_ids
        .iter()
        .enumerate()
        .map(|(j, &id)| (id, output_page_ids[j.min(output_page_ids.len() - 1)]))
        .collect();

    // Objects copied from each source; ObjectIds are only unique per document
    let mut template_cache: HashMap<ObjectId, ObjectId> = HashMap::new();
    let mut content_cache: HashMap<ObjectId, ObjectId> = HashMap::new();
    // Letterhead page -> its form XObject, shared by every page reusing it
    let mut background_forms: HashMap<ObjectId, ObjectId> = HashMap::new();

    for (i, (&content_page_id, &page_id)) in
        content_ids.iter().zip(&output_page_ids).enumerate()
    {
        let template_index = template_page_index(i, template_ids.len())
            .ok_or_else(|| OverlayError::PageTree("letterhead page index".to_string()))?;
        let template_page_id = template_ids[template_index];

        let background_id = match background_forms.get(&template_page_id) {
            Some(&id) => id,
            None => {
                let id = create_page_xobject(
                    &mut output,
                    template,
                    template_page_id,
                    &mut template_cache,
                )?;
                background_forms.insert(template_page_id, id);
                id
            }
        };

        let content_form_id =
            create_page_xobject(&mut output, content, content_page_id, &mut content_cache)?;

        render_composed_page(
            &mut output,
            template,
            template_page_id,
            page_id,
            background_id,
            content_form_id,
            pages_tree_id,
        )?;

        let mut annotations = copy_page_annotations(
            &mut output,
            template,
            template_page_id,
            page_id,
            &template_pages,
            &template_cache,
        )?;
        annotations.extend(copy_page_annotations(
            &mut output,
            content,
            content_page_id,
            page_id,
            &content_pages,
            &content_cache,
        )?);
        if !annotations.is_empty() {
            output
                .get_dictionary_mut(page_id)?
                .set("Annots", Object::Array(annotations));
        }

        page_refs.push(Object::Reference(page_id));
        background_pages.push(template_index);
    }

    log::info!(
        "Composed {} invoice page(s) over {} letterhead page(s), {} letterhead page(s) used",
        content_ids.len(),
        template_ids.len(),
        background_forms.len()
    );

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);
    output.compress();

    Ok(ComposedDocument {
        document: output,
        background_pages,
    })
}
