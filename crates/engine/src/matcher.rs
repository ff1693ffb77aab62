use crate::columns::{self, lookup};
use crate::model::{MatchGroup, RowRecord};
use crate::normalize::normalize;

/// A request row is an engine request when its normalized part description
/// contains either marker. Both are tested even though the first subsumes
/// the second, for robustness against partial data.
const REQUEST_MARKERS: [&str; 2] = ["motore compl", "motore completo"];

/// An inventory part description qualifies when it contains either marker:
/// complete engines ("motore completo") or semi-complete ones
/// ("motore semicompleto"), both covered by "motore compl".
const INVENTORY_MARKERS: [&str; 2] = ["motore compl", "motore semicompl"];

/// Stage-1 filter: does this request row ask for a complete engine?
pub fn is_engine_request(request: &RowRecord) -> bool {
    let description = normalize(lookup(request, columns::REQUEST_PART_DESCRIPTION));
    REQUEST_MARKERS.iter().any(|marker| description.contains(marker))
}

fn is_engine_part(normalized_description: &str) -> bool {
    INVENTORY_MARKERS
        .iter()
        .any(|marker| normalized_description.contains(marker))
}

/// Brand/model/year containment predicate.
///
/// `brand` and `year` come from the request's own columns; `model` reuses the
/// request's part description as the model token. Each check is vacuously
/// true when its request field is empty, except that a request with neither
/// brand nor model never matches (a year alone is not enough to correlate).
///
/// Containment is a plain substring test, so a very short description can
/// over-match unrelated inventory text. Known limitation of the matching
/// semantics, kept as-is.
pub fn satisfies(inventory_text: &str, request: &RowRecord) -> bool {
    let brand = normalize(lookup(request, columns::REQUEST_BRAND));
    let model = normalize(lookup(request, columns::REQUEST_PART_DESCRIPTION));
    let year = normalize(lookup(request, columns::REQUEST_YEAR));
    let inventory = normalize(inventory_text);

    if brand.is_empty() && model.is_empty() {
        return false;
    }

    let brand_ok = brand.is_empty() || inventory.contains(&brand);
    let model_ok = model.is_empty() || inventory.contains(&model);
    let year_ok = year.is_empty() || inventory.contains(&year);

    brand_ok && model_ok && year_ok
}

/// Match inventory rows against engine requests.
///
/// Stage 1 keeps only engine requests (dropped rows produce no group at all).
/// Stage 2 scans the full inventory per surviving request, in input order,
/// collecting rows whose normalized engine code equals the request's exactly,
/// whose part description carries an inventory marker, and which pass
/// [`satisfies`]. One group per surviving request, zero matches included.
pub fn match_rows(inventory: &[RowRecord], requests: &[RowRecord]) -> Vec<MatchGroup> {
    requests
        .iter()
        .filter(|request| is_engine_request(request))
        .map(|request| {
            let engine_code = normalize(lookup(request, columns::REQUEST_ENGINE_CODE));

            let matches: Vec<RowRecord> = inventory
                .iter()
                .filter(|item| {
                    let item_code = normalize(lookup(item, columns::INVENTORY_ENGINE_CODE));
                    if item_code != engine_code {
                        return false;
                    }

                    let description = lookup(item, columns::INVENTORY_PART_DESCRIPTION);
                    if !is_engine_part(&normalize(description)) {
                        return false;
                    }

                    satisfies(description, request)
                })
                .cloned()
                .collect();

            MatchGroup {
                request: request.clone(),
                matches,
            }
        })
        .collect()
}
