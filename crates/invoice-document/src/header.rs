//! Invoice identity fields

use std::collections::BTreeMap;

/// Fallback used when the header table carries no `invoice_number`.
pub const DEFAULT_INVOICE_NUMBER: &str = "0000";

/// Supplier, client and invoice identity.
///
/// Built from the open key/value header table. Every recognised key has its
/// own field; an empty string means "not provided" and the matching line is
/// left out of the layout. Keys the builder does not know are kept in
/// `extra` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceHeader {
    pub invoice_number: String,
    pub invoice_date: String,
    pub due_date: String,
    pub reference: String,

    pub supplier_name: String,
    pub supplier_address: String,
    pub supplier_vat_id: String,
    pub supplier_iban: String,

    pub client_name: String,
    pub client_address: String,
    pub client_vat_id: String,

    /// Trailing free text printed after the totals
    pub note: String,

    pub extra: BTreeMap<String, String>,
}

impl Default for InvoiceHeader {
    fn default() -> Self {
        Self {
            invoice_number: DEFAULT_INVOICE_NUMBER.to_string(),
            invoice_date: String::new(),
            due_date: String::new(),
            reference: String::new(),
            supplier_name: String::new(),
            supplier_address: String::new(),
            supplier_vat_id: String::new(),
            supplier_iban: String::new(),
            client_name: String::new(),
            client_address: String::new(),
            client_vat_id: String::new(),
            note: String::new(),
            extra: BTreeMap::new(),
        }
    }
}

impl InvoiceHeader {
    /// Build a header from key/value pairs.
    ///
    /// Keys are trimmed and lower-cased; a repeated key overwrites the earlier
    /// value. Values are trimmed. A blank `invoice_number` keeps the default.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut header = Self::default();

        for (key, value) in pairs {
            let key = key.as_ref().trim().to_lowercase();
            let value = value.as_ref().trim().to_string();

            match key.as_str() {
                "invoice_number" => {
                    if !value.is_empty() {
                        header.invoice_number = value;
                    }
                }
                "invoice_date" => header.invoice_date = value,
                "due_date" => header.due_date = value,
                "reference" => header.reference = value,
                "supplier_name" => header.supplier_name = value,
                "supplier_address" => header.supplier_address = value,
                "supplier_vat_id" => header.supplier_vat_id = value,
                "supplier_iban" => header.supplier_iban = value,
                "client_name" => header.client_name = value,
                "client_address" => header.client_address = value,
                "client_vat_id" => header.client_vat_id = value,
                "note" => header.note = value,
                "" => {}
                _ => {
                    log::debug!("Keeping unrecognised header key '{}'", key);
                    header.extra.insert(key, value);
                }
            }
        }

        header
    }

    /// Suggested output filename, e.g. `invoice_2025-0007.pdf`
    pub fn suggested_filename(&self) -> String {
        let stem: String = self
            .invoice_number
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("invoice_{}.pdf", stem)
    }
}

/// Split a multi-line header value on newlines or `|`.
pub fn split_lines(value: &str) -> Vec<&str> {
    value
        .split(['\n', '|'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_keys() {
        let header = InvoiceHeader::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(header.invoice_number, DEFAULT_INVOICE_NUMBER);
        assert!(header.client_name.is_empty());
        assert!(header.extra.is_empty());
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let header = InvoiceHeader::from_pairs([
            (" Invoice_Number ", "2025-0007"),
            ("project_code", "X-12"),
        ]);
        assert_eq!(header.invoice_number, "2025-0007");
        assert_eq!(header.extra.get("project_code").map(String::as_str), Some("X-12"));
    }

    #[test]
    fn test_later_key_wins() {
        let header = InvoiceHeader::from_pairs([("client_name", "A"), ("client_name", "B")]);
        assert_eq!(header.client_name, "B");
    }

    #[test]
    fn test_suggested_filename_sanitized() {
        let header = InvoiceHeader::from_pairs([("invoice_number", "2025/07 #3")]);
        assert_eq!(header.suggested_filename(), "invoice_2025_07__3.pdf");
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(
            split_lines("Main St 1 | 1000 AA Amsterdam\nNL"),
            vec!["Main St 1", "1000 AA Amsterdam", "NL"]
        );
    }
}
