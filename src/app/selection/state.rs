//! Zustandsdefinitionen und Konstruktor der Selektions-State-Machine.

use crate::core::{CroppedRegion, PathShape, Point, Region, ReplicationVector};
use crate::shared::options::{clamp_alpha, clamp_repeat_count, DEFAULT_ALPHA, DEFAULT_REP_COUNT};
use glam::Vec2;
use image::RgbaImage;

/// Interpretationszustand der Zeigerereignisse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Keine Geste aktiv (oder Geste gerade begonnen, noch ohne Bewegung)
    #[default]
    Initial,
    /// Freihand-Pfad wird gezeichnet
    MarkerMove,
    /// Zeiger während des Zeichnens losgelassen
    Released,
    /// Pfad geschlossen, Ausschnitt erzeugt
    AreaSelected,
    /// Selektion innerhalb des Pfads gegriffen
    SelectionGrabbed,
    /// Selektion wird gezogen, Replikationsvektor aktiv
    SelectionDragging,
}

impl SelectionState {
    /// `true` für alle Zustände mit aktivem Ausschnitt.
    pub fn has_area(self) -> bool {
        matches!(
            self,
            Self::AreaSelected | Self::SelectionGrabbed | Self::SelectionDragging
        )
    }
}

/// Benachrichtigungen an den Host (Sichtbarkeit der Einstellungen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionNotification {
    AreaSelected,
    AreaReleased,
}

/// Selektions-Engine: Pfad, Snap, Ausschnitt und Replikation.
///
/// Besitzt ihren gesamten Zustand; mehrere Instanzen sind unabhängig.
#[derive(Debug, Clone)]
pub struct SelectionMachine {
    pub(crate) state: SelectionState,
    pub(crate) path: PathShape,
    /// Startpunkt der aktuellen Geste (Marker), `None` vor der ersten Geste
    pub(crate) initial_point: Option<Point>,
    pub(crate) last_point: Point,
    pub(crate) grab_point: Point,
    pub(crate) drag_point: Point,
    /// Anzahl der Bewegungen in der aktuellen Geste
    pub(crate) mark_count: u32,
    pub(crate) cropped: Option<CroppedRegion>,
    /// Rasterabdeckung des geschlossenen Pfads für Treffertests
    pub(crate) hit_region: Region,
    pub(crate) vector: ReplicationVector,
    pub(crate) repeat_count: u32,
    pub(crate) overlay_alpha: u8,
    pub(crate) source: Option<RgbaImage>,
    pub(crate) notifications: Vec<SelectionNotification>,
    pub(crate) overlay_revision: u64,
}

impl SelectionMachine {
    /// Erstellt eine Engine mit Standard-Wiederholung und -Deckkraft.
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_REP_COUNT, DEFAULT_ALPHA)
    }

    /// Erstellt eine Engine mit vorgegebenen (geklemmten) Einstellungen.
    pub fn with_settings(repeat_count: u32, overlay_alpha: u8) -> Self {
        Self {
            state: SelectionState::Initial,
            path: PathShape::new(),
            initial_point: None,
            last_point: Vec2::ZERO,
            grab_point: Vec2::ZERO,
            drag_point: Vec2::ZERO,
            mark_count: 0,
            cropped: None,
            hit_region: Region::default(),
            vector: ReplicationVector::default(),
            repeat_count: clamp_repeat_count(repeat_count.min(i32::MAX as u32) as i32),
            overlay_alpha: clamp_alpha(overlay_alpha as i32),
            source: None,
            notifications: Vec::new(),
            overlay_revision: 0,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn path(&self) -> &PathShape {
        &self.path
    }

    /// Position des Startpunkt-Markers.
    pub fn marker(&self) -> Option<Point> {
        self.initial_point
    }

    pub fn cropped_region(&self) -> Option<&CroppedRegion> {
        self.cropped.as_ref()
    }

    pub fn replication_vector(&self) -> ReplicationVector {
        self.vector
    }

    pub fn repeat_count(&self) -> u32 {
        self.repeat_count
    }

    pub fn overlay_alpha(&self) -> u8 {
        self.overlay_alpha
    }

    pub fn grab_point(&self) -> Point {
        self.grab_point
    }

    pub fn source_image(&self) -> Option<&RgbaImage> {
        self.source.as_ref()
    }

    pub fn has_source_image(&self) -> bool {
        self.source.is_some()
    }

    /// Zähler, der bei jeder Änderung der Overlay-Pixel erhöht wird.
    pub fn overlay_revision(&self) -> u64 {
        self.overlay_revision
    }

    /// Entnimmt alle ausstehenden Benachrichtigungen.
    pub fn drain_notifications(&mut self) -> Vec<SelectionNotification> {
        std::mem::take(&mut self.notifications)
    }

    pub(crate) fn bump_overlay(&mut self) {
        self.overlay_revision = self.overlay_revision.wrapping_add(1);
    }
}

impl Default for SelectionMachine {
    fn default() -> Self {
        Self::new()
    }
}
