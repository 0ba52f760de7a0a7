//! Line item arithmetic and invoice totals

use crate::options::ItemMode;
use crate::types::*;

/// Derive per-line amounts and the invoice totals.
///
/// Sums are accumulated in f64 and never rounded here; rounding to cents
/// happens once, when an amount is formatted for display.
pub fn compute(
    items: &[LineItemRaw],
    mode: ItemMode,
) -> Result<(Vec<LineItemComputed>, Totals)> {
    if items.is_empty() && mode == ItemMode::Strict {
        return Err(InvoiceError::EmptyInput);
    }

    let computed: Vec<LineItemComputed> = items.iter().map(compute_line).collect();

    let subtotal_excl: f64 = computed.iter().map(|line| line.line_total_excl).sum();
    let total_vat: f64 = computed.iter().map(|line| line.vat_amount).sum();

    let totals = Totals {
        subtotal_excl,
        total_vat,
        grand_total: subtotal_excl + total_vat,
    };

    log::debug!(
        "Computed {} line items: subtotal {:.2}, VAT {:.2}, total {:.2}",
        computed.len(),
        totals.subtotal_excl,
        totals.total_vat,
        totals.grand_total
    );

    Ok((computed, totals))
}

/// Derive the amounts for a single line.
pub fn compute_line(item: &LineItemRaw) -> LineItemComputed {
    let line_total_excl = item.quantity * item.unit_price;
    let vat_amount = line_total_excl * item.vat_pct / 100.0;

    LineItemComputed {
        raw: item.clone(),
        line_total_excl,
        vat_amount,
        line_total_incl: line_total_excl + vat_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_line_consulting() {
        let line = compute_line(&LineItemRaw::new("Consulting", 10.0, 100.0, 21.0));
        assert_eq!(line.line_total_excl, 1000.0);
        assert_eq!(line.vat_amount, 210.0);
        assert_eq!(line.line_total_incl, 1210.0);
    }

    #[test]
    fn test_compute_empty_lenient_is_zero() {
        let (items, totals) = compute(&[], ItemMode::Lenient).unwrap();
        assert!(items.is_empty());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_compute_empty_strict_fails() {
        assert!(matches!(
            compute(&[], ItemMode::Strict),
            Err(InvoiceError::EmptyInput)
        ));
    }
}
