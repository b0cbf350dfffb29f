use crate::application::ports::area_repository::AreaRepository;
use crate::application::services::geometry;
use crate::domain::catalogue::area::Coordinate;
use crate::domain::error::DomainResult;

pub struct GetAreaCoordinates<'a, A: AreaRepository + ?Sized> {
    pub areas: &'a A,
}

impl<'a, A: AreaRepository + ?Sized> GetAreaCoordinates<'a, A> {
    /// `None` when the area has no coordinate rows at all, never an empty
    /// list.
    pub async fn execute(&self, area_id: i64) -> DomainResult<Option<Vec<Vec<Coordinate>>>> {
        let rows = self.areas.coordinate_rows(area_id).await?;
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(geometry::group_rings(&rows)))
    }
}
