//! Zustand des Transform-Handles, das an einen Kontrollpunkt gebunden werden kann.

/// Bindung des Verschiebe-Handles an einen Kontrollpunkt.
///
/// Der Index verweist immer auf einen existierenden Punkt des besitzenden
/// `SplinePointSet`; das Set löst die Bindung, bevor es den Punkt entfernt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformHandle {
    attached: Option<usize>,
    dragging: bool,
}

impl TransformHandle {
    /// Erstellt ein ungebundenes Handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index des gebundenen Kontrollpunkts.
    pub fn attached(&self) -> Option<usize> {
        self.attached
    }

    /// Gibt `true` zurück, wenn das Handle an `index` gebunden ist.
    pub fn is_attached_to(&self, index: usize) -> bool {
        self.attached == Some(index)
    }

    /// Bindet das Handle an einen Kontrollpunkt. Gibt `true` zurück, wenn sich die Bindung geändert hat.
    pub(crate) fn attach(&mut self, index: usize) -> bool {
        if self.attached == Some(index) {
            return false;
        }
        self.attached = Some(index);
        self.dragging = false;
        true
    }

    /// Löst die Bindung. Ein laufender Drag wird abgebrochen.
    pub(crate) fn detach(&mut self) -> Option<usize> {
        self.dragging = false;
        self.attached.take()
    }

    /// Gibt zurück, ob das gebundene Handle gerade gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Startet oder beendet einen Drag. Ohne Bindung bleibt `dragging` aus.
    pub(crate) fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging && self.attached.is_some();
    }
}
