//! Latitude/longitude string formatting.
//!
//! Decimal degrees with hemisphere suffixes (N/S, E/W), not
//! sexagesimal conversion.

/// Template and precision for [`format_latlon`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatLonFormat {
    /// Output template; `%lat` and `%lon` are replaced by the
    /// formatted components.
    pub template: String,
    /// Decimal places for the latitude component.
    pub lat_decimals: usize,
    /// Decimal places for the longitude component.
    pub lon_decimals: usize,
}

impl Default for LatLonFormat {
    fn default() -> Self {
        Self {
            template: "(%lat, %lon)".to_string(),
            lat_decimals: 2,
            lon_decimals: 2,
        }
    }
}

impl LatLonFormat {
    /// Same number of decimal places for both components.
    pub fn with_decimals(decimals: usize) -> Self {
        Self {
            lat_decimals: decimals,
            lon_decimals: decimals,
            ..Default::default()
        }
    }
}

/// Format a latitude/longitude pair with hemisphere suffixes.
///
/// Inputs are folded with `fmod` into (-90, 90) and (-180, 180);
/// the sign selects N/S and E/W and the absolute value is printed.
pub fn format_latlon(lat: f64, lon: f64, format: &LatLonFormat) -> String {
    let lat = lat % 90.0;
    let lon = lon % 180.0;

    let ns = if lat >= 0.0 { 'N' } else { 'S' };
    let ew = if lon >= 0.0 { 'E' } else { 'W' };

    let lat_str = format!("{:.*}{}", format.lat_decimals, lat.abs(), ns);
    let lon_str = format!("{:.*}{}", format.lon_decimals, lon.abs(), ew);

    format
        .template
        .replace("%lat", &lat_str)
        .replace("%lon", &lon_str)
}
