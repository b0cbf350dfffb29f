use crate::application::ports::lookup_repository::LookupRepository;
use crate::domain::catalogue::document::Stakeholder;
use crate::domain::error::DomainResult;

pub struct ListStakeholders<'a, R: LookupRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: LookupRepository + ?Sized> ListStakeholders<'a, R> {
    pub async fn execute(&self) -> DomainResult<Vec<Stakeholder>> {
        self.repo.list_stakeholders().await
    }
}
