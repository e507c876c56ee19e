use crate::{
    error::DefinitionError,
    intent::{IntentConstructor, Param},
    model::InteractionKind,
    shape::ShapeModel,
};
use std::sync::Arc;

///
/// EntitySchema
/// An entity name and the three shape models synthesized from it.
///

#[derive(Clone, Debug)]
pub struct EntitySchema {
    name: &'static str,
    create: Arc<ShapeModel>,
    edit: Arc<ShapeModel>,
    get: Arc<ShapeModel>,
}

impl EntitySchema {
    pub(crate) const fn new(
        name: &'static str,
        create: Arc<ShapeModel>,
        edit: Arc<ShapeModel>,
        get: Arc<ShapeModel>,
    ) -> Self {
        Self {
            name,
            create,
            edit,
            get,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn shape(&self, kind: InteractionKind) -> &Arc<ShapeModel> {
        match kind {
            InteractionKind::Create => &self.create,
            InteractionKind::Edit => &self.edit,
            InteractionKind::Get => &self.get,
        }
    }

    #[must_use]
    pub const fn create(&self) -> &Arc<ShapeModel> {
        &self.create
    }

    #[must_use]
    pub const fn edit(&self) -> &Arc<ShapeModel> {
        &self.edit
    }

    #[must_use]
    pub const fn get(&self) -> &Arc<ShapeModel> {
        &self.get
    }

    /// Declare an intent constructor over the shape for `kind`.
    /// Every parameter must name a field of that shape.
    pub fn intent(
        &self,
        kind: InteractionKind,
        name: &'static str,
        params: impl IntoIterator<Item = Param>,
    ) -> Result<IntentConstructor, DefinitionError> {
        IntentConstructor::new(name, Arc::clone(self.shape(kind)), params.into_iter().collect())
    }
}
