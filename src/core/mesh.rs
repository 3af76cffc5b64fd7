//! Parser für das texturierte 2.5D-Wavefront-Mesh (`odm_texturing_25d`).

use glam::DVec3;
use regex::Regex;

use crate::core::domain::BoundingDomain;
use crate::core::error::LoadError;

const FACET_PATTERN: &str = r"^f (\d+)/\d+/\d+ (\d+)/\d+/\d+ (\d+)/\d+/\d+$";

/// Dreiecks-Mesh des 2.5D-Modells mit abgeleiteten Kennwerten.
#[derive(Debug, Clone)]
pub struct Wavefront25d {
    pub points: Vec<DVec3>,
    /// Facetten als 0-basierte Vertex-Indizes.
    pub facets: Vec<[u32; 3]>,
    pub bounds: BoundingDomain,
    /// Blockraster (nb_x, nb_y) über den Bounds, möglichst quadratisch.
    pub paving_dimensions: (u32, u32),
}

/// Liest `v`- und `f`-Zeilen eines OBJ-Texts; alle anderen Zeilen
/// (Normalen, Texturkoordinaten, Material-Anweisungen) werden
/// übersprungen.
pub fn parse_wavefront_25d(text: &str) -> Result<Wavefront25d, LoadError> {
    let facet_re = Regex::new(FACET_PATTERN)
        .map_err(|e| LoadError::Schema(format!("Facetten-Pattern: {e}")))?;

    let mut points = Vec::new();
    let mut facets = Vec::new();
    for line in text.lines() {
        if let Some(rest) = line.strip_prefix("v ") {
            points.push(parse_vertex(line, rest)?);
        } else if line.starts_with("f ") {
            facets.push(parse_facet(&facet_re, line.trim_end())?);
        }
    }

    let Some(bounds) = BoundingDomain::from_points(&points) else {
        return Err(LoadError::EmptyMesh);
    };
    let paving_dimensions = paving_sizes(&bounds, points.len());

    Ok(Wavefront25d {
        points,
        facets,
        bounds,
        paving_dimensions,
    })
}

fn parse_vertex(line: &str, rest: &str) -> Result<DVec3, LoadError> {
    let malformed = || LoadError::MalformedVertex {
        line: line.to_string(),
    };
    let mut components = rest.split_whitespace();
    let mut next = || -> Result<f64, LoadError> {
        components
            .next()
            .and_then(|c| c.parse::<f64>().ok())
            .ok_or_else(malformed)
    };
    Ok(DVec3::new(next()?, next()?, next()?))
}

/// Extrahiert die Vertex-Indizes einer Facetten-Zeile, 0-basiert.
fn parse_facet(facet_re: &Regex, line: &str) -> Result<[u32; 3], LoadError> {
    let malformed = || LoadError::MalformedFacet {
        line: line.to_string(),
    };
    let captures = facet_re.captures(line).ok_or_else(malformed)?;
    let mut indices = [0_u32; 3];
    for (slot, capture) in indices.iter_mut().zip([1, 2, 3]) {
        *slot = captures[capture]
            .parse::<u32>()
            .ok()
            .and_then(|i| i.checked_sub(1))
            .ok_or_else(malformed)?;
    }
    Ok(indices)
}

/// Anzahl Raster-Blöcke (nb_x, nb_y), die die Bounds mit mindestens
/// `min_blocks` Blöcken möglichst quadratisch überdecken.
pub fn paving_sizes(bounds: &BoundingDomain, min_blocks: usize) -> (u32, u32) {
    let width = bounds.x.span();
    let height = bounds.y.span();
    let r = width / height;
    let nb_y = (min_blocks as f64 / r).sqrt().ceil();
    let nb_x = (nb_y * r).ceil();
    (nb_x as u32, nb_y as u32)
}
