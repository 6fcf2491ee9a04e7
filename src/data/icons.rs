//! Icon assignment: tags POI features with stable atlas identifiers so the
//! POI layer can reference their images by name.

use crate::core::constants::POI_ICON_PREFIX;
use crate::data::geojson::FeatureCollection;

/// Attaches sequential `iconId` properties to POI features.
///
/// Walks features in order; each with `type == "POI"` and a non-empty
/// `image` URL gets the next identifier, starting at 0. Features without a
/// usable image stay untagged and the POI layer simply renders them without
/// an icon. Identifiers are stable for one load cycle only.
pub fn assign_poi_icons(collection: &mut FeatureCollection) {
    let mut icon_index = 0usize;

    for feature in &mut collection.features {
        if !feature.is_poi() || feature.image_url().is_none() {
            continue;
        }
        feature.set_icon_id(format!("{}{}", POI_ICON_PREFIX, icon_index));
        icon_index += 1;
    }
}

/// Lists `(icon id, image url)` pairs in assignment order, ready for the
/// image registration loop.
pub fn poi_images(collection: &FeatureCollection) -> Vec<(String, String)> {
    collection
        .features
        .iter()
        .filter(|feature| feature.is_poi())
        .filter_map(|feature| match (feature.icon_id(), feature.image_url()) {
            (Some(icon_id), Some(url)) => Some((icon_id.to_string(), url.to_string())),
            _ => None,
        })
        .collect()
}
