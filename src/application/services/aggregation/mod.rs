//! Folds flat, unordered join rows into nested per-document view-models.
//!
//! Every fold streams rows once, grouping by a leading key (document id) and
//! then by nested keys (area name, sub_area_id). List-valued fields keep the
//! incoming row order, except coordinates, which sort by `n_order`.

use std::collections::HashMap;

use crate::application::ports::document_repository::{
    DocumentStakeholderRow, GeoRow, PositionRow,
};
use crate::application::services::geometry;
use crate::domain::catalogue::area::CoordinateRow;
use crate::domain::catalogue::document::{
    Document, DocumentPosition, DocumentView, GeoDocumentView, GeolocationGroup,
};

// Stakeholder lists are unique sets preserving first-seen order.
fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.iter().any(|v| v == &value) {
        list.push(value);
    }
}

pub fn fold_documents(rows: Vec<DocumentStakeholderRow>) -> Vec<DocumentView> {
    let mut views: Vec<DocumentView> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();
    for row in rows {
        let i = *index.entry(row.document.id).or_insert_with(|| {
            views.push(DocumentView {
                document: row.document.clone(),
                stakeholders: Vec::new(),
            });
            views.len() - 1
        });
        if let Some(name) = row.stakeholder {
            push_unique(&mut views[i].stakeholders, name);
        }
    }
    views
}

struct GroupFold {
    area_name: String,
    rows: Vec<CoordinateRow>,
    // Ring identity of every row already folded in; the stakeholder
    // cross-product repeats each coordinate row once per stakeholder.
    seen: Vec<(Option<i64>, Option<i32>, u64, u64)>,
}

struct GeoFold {
    document: Document,
    stakeholders: Vec<String>,
    groups: Vec<GroupFold>,
}

pub fn fold_documents_geo(rows: Vec<GeoRow>) -> Vec<GeoDocumentView> {
    let mut folds: Vec<GeoFold> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();
    for row in rows {
        let i = *index.entry(row.document.id).or_insert_with(|| {
            folds.push(GeoFold {
                document: row.document.clone(),
                stakeholders: Vec::new(),
                groups: Vec::new(),
            });
            folds.len() - 1
        });
        let fold = &mut folds[i];
        if let Some(name) = row.stakeholder {
            push_unique(&mut fold.stakeholders, name);
        }

        let area_name = row.area.display_name();
        let group = match fold.groups.iter_mut().position(|g| g.area_name == area_name) {
            Some(at) => &mut fold.groups[at],
            None => {
                fold.groups.push(GroupFold {
                    area_name: area_name.to_string(),
                    rows: Vec::new(),
                    seen: Vec::new(),
                });
                fold.groups.last_mut().unwrap()
            }
        };
        let key = (
            row.coordinate.sub_area_id,
            row.coordinate.n_order,
            row.coordinate.long.to_bits(),
            row.coordinate.lat.to_bits(),
        );
        if !group.seen.contains(&key) {
            group.seen.push(key);
            group.rows.push(row.coordinate);
        }
    }

    folds
        .into_iter()
        .map(|f| GeoDocumentView {
            document: f.document,
            stakeholders: f.stakeholders,
            geolocations: f
                .groups
                .into_iter()
                .map(|mut g| {
                    g.rows
                        .sort_by_key(|r| (r.sub_area_id.unwrap_or(0), r.n_order.unwrap_or(0)));
                    GeolocationGroup {
                        area_name: g.area_name,
                        coordinates: g.rows.into_iter().map(|r| r.coordinate()).collect(),
                    }
                })
                .collect(),
        })
        .collect()
}

pub fn fold_position(rows: Vec<PositionRow>) -> Option<DocumentPosition> {
    let document = rows.first()?.document.clone();
    let coords: Vec<CoordinateRow> = rows.iter().map(|r| r.coordinate).collect();
    Some(DocumentPosition {
        document,
        coordinates: geometry::group_rings(&coords),
    })
}
