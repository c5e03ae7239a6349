//! Spin-Zustandsmaschine: `Idle → Spinning → Idle`.
//!
//! Der Controller besitzt keinen Timer. Er wird von außen pro Frame mit
//! monoton steigenden Zeitstempeln getrieben und rechnet jede Auswertung
//! komplett aus der absoluten verstrichenen Zeit — unempfindlich gegen
//! unregelmäßige Frame-Abstände und verpasste Frames.

use rand::Rng;
use std::f32::consts::TAU;
use std::fmt;

use super::angles::segment_span;

/// Minimale Gesamtdrehung eines Spins in vollen Umdrehungen.
pub const SPIN_MIN_TURNS: f32 = 5.0;
/// Maximale Gesamtdrehung eines Spins in vollen Umdrehungen (exklusiv).
pub const SPIN_MAX_TURNS: f32 = 10.0;

/// Ablehnungsgründe für einen Spin-Wunsch. Beide sind erwartbar und werden
/// dem Aufrufer direkt gemeldet — kein Retry, kein stiller Fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinRejection {
    /// Weniger als 2 Optionen in der Liste.
    InsufficientOptions,
    /// Es läuft bereits eine Animation (de-facto Abbruch-Schutz;
    /// ein Abbrechen mitten im Spin gibt es nicht).
    AlreadySpinning,
}

impl fmt::Display for SpinRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpinRejection::InsufficientOptions => {
                write!(f, "Mindestens 2 Optionen nötig, um das Rad zu drehen")
            }
            SpinRejection::AlreadySpinning => write!(f, "Das Rad dreht sich bereits"),
        }
    }
}

impl std::error::Error for SpinRejection {}

/// Eine laufende Spin-Animation.
#[derive(Debug, Clone, Copy)]
pub struct SpinJob {
    /// Rotation beim Start des Spins.
    pub start_angle: f32,
    /// Absolute Ziel-Rotation.
    pub target_angle: f32,
    /// Gewählter Ziel-Segment-Index (für Logging/Statusanzeige).
    pub target_index: usize,
    /// Startzeitpunkt in Sekunden (monotone Host-Uhr).
    pub start_time: f64,
    /// Feste Animationsdauer in Sekunden.
    pub duration: f32,
}

impl SpinJob {
    /// Fortschritt in `[0, 1]` zum Zeitpunkt `now`.
    pub fn progress(&self, now: f64) -> f32 {
        let elapsed = now - self.start_time;
        (elapsed / self.duration.max(f32::EPSILON) as f64).clamp(0.0, 1.0) as f32
    }
}

/// Ergebnis eines Animations-Ticks.
#[derive(Debug, Clone, Copy)]
pub struct SpinTick {
    /// Neue Rotation in Radiant.
    pub rotation: f32,
    /// Genau einmal `true`: beim Tick, der die Animation abschließt.
    pub done: bool,
}

/// Ease-out-Quart: Winkelgeschwindigkeit startet hoch und klingt bis zum
/// Ende auf null ab.
pub fn ease_out_quart(progress: f32) -> f32 {
    1.0 - (1.0 - progress).powi(4)
}

/// Zustandsmaschine für die Spin-Animation.
#[derive(Debug, Clone, Default)]
pub struct SpinController {
    job: Option<SpinJob>,
}

impl SpinController {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt zurück, ob gerade eine Animation läuft.
    pub fn is_spinning(&self) -> bool {
        self.job.is_some()
    }

    /// Liefert den laufenden Job, falls vorhanden.
    pub fn current_job(&self) -> Option<&SpinJob> {
        self.job.as_ref()
    }

    /// Startet einen Spin ab `current_rotation`.
    ///
    /// Gesamtdrehung: uniform `[5, 10)` volle Umdrehungen. Ziel-Segment:
    /// uniform in `[0, N)`, unabhängig von der Gesamtdrehung — dadurch ist
    /// das Lande-Segment unabhängig von der Listengröße gleichverteilt.
    pub fn request_spin<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        option_count: usize,
        current_rotation: f32,
        now: f64,
        duration: f32,
    ) -> Result<&SpinJob, SpinRejection> {
        if option_count < 2 {
            return Err(SpinRejection::InsufficientOptions);
        }
        if self.job.is_some() {
            return Err(SpinRejection::AlreadySpinning);
        }

        let sweep = rng.random_range(SPIN_MIN_TURNS..SPIN_MAX_TURNS) * TAU;
        let target_index = rng.random_range(0..option_count);
        let target_angle =
            current_rotation + sweep + target_index as f32 * segment_span(option_count);

        let job = SpinJob {
            start_angle: current_rotation,
            target_angle,
            target_index,
            start_time: now,
            duration,
        };
        Ok(self.job.insert(job))
    }

    /// Wertet die Animation zum Zeitpunkt `now` aus.
    ///
    /// `None` im Zustand `Idle`. Bei Fortschritt 1 wird exakt der Zielwinkel
    /// geliefert (kein Float-Überschwingen), der Job verworfen und `done`
    /// genau einmal signalisiert.
    pub fn tick(&mut self, now: f64) -> Option<SpinTick> {
        let job = self.job?;
        let progress = job.progress(now);

        if progress >= 1.0 {
            self.job = None;
            return Some(SpinTick {
                rotation: job.target_angle,
                done: true,
            });
        }

        let eased = ease_out_quart(progress);
        Some(SpinTick {
            rotation: job.start_angle + (job.target_angle - job.start_angle) * eased,
            done: false,
        })
    }
}
