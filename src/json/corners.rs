//! Parser für die Orthophoto-Ecken (JSON- und ODM-Textformat).

use crate::core::{Corners, LoadError};

/// `odm_orthophoto_corners.json`: `{"x": [x0, x1], "y": [y0, y1]}`.
pub fn parse_corners_json(json: &str) -> Result<Corners, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// ODM-Textformat (`odm_orthophoto_corners.txt`): eine Zeile mit vier
/// Werten `x_min y_min x_max y_max`.
pub fn parse_corners_txt(text: &str) -> Result<Corners, LoadError> {
    let line = text.trim();
    let malformed = || LoadError::MalformedCorners {
        line: line.to_string(),
    };

    let values = line
        .split_whitespace()
        .map(|v| v.parse::<f64>().map_err(|_| malformed()))
        .collect::<Result<Vec<f64>, LoadError>>()?;
    match values.as_slice() {
        [x_min, y_min, x_max, y_max] => Ok(Corners {
            x: [*x_min, *x_max],
            y: [*y_min, *y_max],
        }),
        _ => Err(malformed()),
    }
}
