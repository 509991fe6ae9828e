//! Selektions-State-Machine: Freihand-Pfad, Auto-Schließen, Ausschnitt
//! und Replikationsvektor für den Echo-Effekt.
//!
//! Alle Operationen laufen synchron im UI-Thread. Ohne Quellbild sind
//! Zeigerereignisse wirkungslos.

mod gesture;
mod snap;
mod state;


pub use state::{SelectionMachine, SelectionNotification, SelectionState};
