//! Route normalisation for span names and metric labels.

/// Collection segments whose following segment is a product key.
const KEYED_COLLECTIONS: [&str; 1] = ["product"];

/// Replace path parameters with placeholders so routes stay low-cardinality.
pub(super) fn normalise_route(path: &str) -> String {
    let mut previous: Option<&str> = None;

    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let normalised = match previous {
                Some(collection) if KEYED_COLLECTIONS.contains(&collection) => "{sku}",
                _ => segment,
            };

            previous = Some(segment);

            normalised
        })
        .collect();

    format!("/{}", segments.join("/"))
}
