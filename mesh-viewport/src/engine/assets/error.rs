use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerAssetError {
    #[error("failed to read asset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse model: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("geometry file contains no models")]
    EmptyGeometry,
}
