//! Achsen-Domänen und Aspekt-erhaltendes Einpassen in einen Viewport.

use glam::DVec3;

use crate::core::error::FitError;

/// Wertebereich einer Achse in Welt-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Ausdehnung der Achse.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Achse ohne Ausdehnung (`max == min`).
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Einheits-Bereich um einen Einzelwert (Fallback für degenerierte Achsen).
    pub fn unit_around(value: f64) -> Self {
        Self {
            min: value - 0.5,
            max: value + 0.5,
        }
    }

    /// Symmetrisch um `padding` auf beiden Seiten erweitert.
    pub fn padded(&self, padding: f64) -> Self {
        Self {
            min: self.min - padding,
            max: self.max + padding,
        }
    }

    /// Min/Max über einen Werte-Strom; `None` bei leerem Strom.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut iter = values.into_iter();
        let first = iter.next()?;
        let mut range = Self::new(first, first);
        for v in iter {
            range.min = range.min.min(v);
            range.max = range.max.max(v);
        }
        Some(range)
    }
}

/// Achsen-ausgerichtete Welt-Box einer Rekonstruktion.
///
/// `z` fehlt, wenn die Box aus reinen 2D-Grenzen (Report-`boundaries`)
/// stammt statt aus der Punktwolke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingDomain {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: Option<AxisRange>,
}

impl BoundingDomain {
    pub fn flat(x: AxisRange, y: AxisRange) -> Self {
        Self { x, y, z: None }
    }

    /// Min/Max aller Punkt-Koordinaten; `None` bei leerer Punktwolke.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let x = AxisRange::from_values(points.iter().map(|p| p.x))?;
        let y = AxisRange::from_values(points.iter().map(|p| p.y))?;
        let z = AxisRange::from_values(points.iter().map(|p| p.z))?;
        Some(Self { x, y, z: Some(z) })
    }
}

/// Ziel-Viewport in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Ergebnis des Fits: aufgefüllte Domänen für beide Achsen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedDomains {
    pub x: AxisRange,
    pub y: AxisRange,
}

/// Passt eine Welt-Box Aspekt-erhaltend in den Viewport ein.
///
/// Pro Achse wird das Verhältnis Pixel-pro-Welteinheit über der um
/// `inset` verkleinerten Viewport-Kante gebildet. Die Achse mit dem
/// kleineren Verhältnis ist die einschränkende und bleibt unverändert;
/// die andere wird symmetrisch aufgefüllt, bis beide Achsen dasselbe
/// Verhältnis haben (Letterboxing statt Verzerrung).
///
/// Eine degenerierte Achse fällt auf einen Einheits-Bereich um ihren
/// Einzelwert zurück, solange die andere Achse Ausdehnung hat.
pub fn fit(
    domain: &BoundingDomain,
    viewport: Viewport,
    inset: f64,
) -> Result<FittedDomains, FitError> {
    let avail_w = viewport.width - 2.0 * inset;
    let avail_h = viewport.height - 2.0 * inset;
    if avail_w <= 0.0 || avail_h <= 0.0 {
        return Err(FitError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
            inset,
        });
    }

    let (x, y) = resolve_degenerate_axes(domain.x, domain.y)?;

    let x_ratio = avail_w / x.span();
    let y_ratio = avail_h / y.span();

    if y_ratio < x_ratio {
        let padding = (x_ratio / y_ratio - 1.0) * x.span() / 2.0;
        Ok(FittedDomains {
            x: x.padded(padding),
            y,
        })
    } else {
        let padding = (y_ratio / x_ratio - 1.0) * y.span() / 2.0;
        Ok(FittedDomains {
            x,
            y: y.padded(padding),
        })
    }
}

fn resolve_degenerate_axes(x: AxisRange, y: AxisRange) -> Result<(AxisRange, AxisRange), FitError> {
    match (x.is_degenerate(), y.is_degenerate()) {
        (true, true) => Err(FitError::DegenerateDomain),
        (true, false) => Ok((AxisRange::unit_around(x.min), y)),
        (false, true) => Ok((x, AxisRange::unit_around(y.min))),
        (false, false) => Ok((x, y)),
    }
}
