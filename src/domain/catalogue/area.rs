/// Display name under which every point area is grouped in aggregated reads.
pub const POINT_AREA_NAME: &str = "Point";

/// Tag carried in the schema; never inferred from the area's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AreaKind {
    Point,
    Polygon,
}

impl AreaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AreaKind::Point => "point",
            AreaKind::Polygon => "polygon",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "point" => Some(AreaKind::Point),
            "polygon" => Some(AreaKind::Polygon),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Area {
    pub id: i64,
    pub kind: AreaKind,
    pub name: Option<String>,
}

impl Area {
    pub fn display_name(&self) -> &str {
        match self.kind {
            AreaKind::Point => POINT_AREA_NAME,
            AreaKind::Polygon => self.name.as_deref().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub long: f64,
    pub lat: f64,
}

/// One raw coordinate row. `sub_area_id` selects the ring (NULL rows collapse
/// into one implicit ring) and `n_order` orders vertices within it.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateRow {
    pub sub_area_id: Option<i64>,
    pub n_order: Option<i32>,
    pub long: f64,
    pub lat: f64,
}

impl CoordinateRow {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            long: self.long,
            lat: self.lat,
        }
    }
}

/// Where a new document goes on the map.
#[derive(Debug, Clone, PartialEq)]
pub enum Placement {
    /// No custom area yet; the assignment stays NULL.
    Unplaced,
    /// A dedicated single-point area owned by this document.
    Point(Coordinate),
    /// An existing named polygon, resolved by name.
    NamedArea(String),
}

/// Outcome of a point-coordinate update. The two shapes mirror the two write
/// paths: a freshly allocated point area vs. an in-place coordinate update.
#[derive(Debug, Clone, PartialEq)]
pub enum PointUpdate {
    Created { area_id: i64, long: f64, lat: f64 },
    Updated { area_id: i64, document_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaAssignment {
    pub document_id: i64,
    pub area_id: i64,
}
