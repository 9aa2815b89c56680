pub mod external;
pub mod noop;

use crate::domain::models::Editor;
use crate::domain::models::EditorName;

pub type EditorBox = Box<dyn Editor + Send + Sync>;

pub struct EditorManager {}

impl EditorManager {
    pub fn get(name: EditorName) -> EditorBox {
        match name {
            EditorName::External => return Box::<external::ExternalEditor>::default(),
            EditorName::None => return Box::<noop::NoopEditor>::default(),
        }
    }
}
