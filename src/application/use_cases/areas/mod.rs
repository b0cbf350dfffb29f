pub mod get_area_coordinates;
pub mod reassign_document_area;
pub mod update_point_coordinates;
