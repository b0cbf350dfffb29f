use crate::application::ports::area_repository::AreaRepository;
use crate::domain::catalogue::area::{AreaKind, Coordinate, PointUpdate};
use crate::domain::error::{DomainError, DomainResult, EntityKind};

pub struct UpdatePointCoordinates<'a, A: AreaRepository + ?Sized> {
    pub areas: &'a A,
}

impl<'a, A: AreaRepository + ?Sized> UpdatePointCoordinates<'a, A> {
    /// Three write paths, keyed on the document's current assignment:
    /// - never placed (NULL area): allocate a fresh point area and re-point
    ///   the assignment, as one transaction;
    /// - a point area the document owns: update its row in place, area id
    ///   unchanged;
    /// - a shared polygon: allocate a fresh point area, leaving the polygon
    ///   untouched.
    pub async fn execute(
        &self,
        document_id: i64,
        coordinate: Coordinate,
    ) -> DomainResult<PointUpdate> {
        let assignment = self
            .areas
            .assignment_for_document(document_id)
            .await?
            .ok_or(DomainError::NotFound(EntityKind::Area))?;

        let current_area_id = match assignment {
            None => {
                let area_id = self
                    .areas
                    .create_point_for_document(document_id, coordinate)
                    .await?;
                return Ok(PointUpdate::Created {
                    area_id,
                    long: coordinate.long,
                    lat: coordinate.lat,
                });
            }
            Some(id) => id,
        };

        let area = self
            .areas
            .area(current_area_id)
            .await?
            .ok_or(DomainError::NotFound(EntityKind::Area))?;

        match area.kind {
            AreaKind::Point => {
                self.areas
                    .update_point_coordinates(current_area_id, coordinate)
                    .await?;
                Ok(PointUpdate::Updated {
                    area_id: current_area_id,
                    document_id,
                })
            }
            AreaKind::Polygon => {
                let area_id = self
                    .areas
                    .create_point_for_document(document_id, coordinate)
                    .await?;
                Ok(PointUpdate::Created {
                    area_id,
                    long: coordinate.long,
                    lat: coordinate.lat,
                })
            }
        }
    }
}
