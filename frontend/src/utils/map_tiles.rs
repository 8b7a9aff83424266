use std::f64::consts::PI;

pub const TILE_SIZE: f64 = 256.0;
pub const DEFAULT_ZOOM: u8 = 16;
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Web-mercator tile holding a coordinate plus the pixel offset of the
/// coordinate inside that tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileAnchor {
    pub zoom: u8,
    pub x: i64,
    pub y: i64,
    pub offset_x: f64,
    pub offset_y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTile {
    pub url: String,
    pub left: f64,
    pub top: f64,
}

pub fn anchor_for(latitude: f64, longitude: f64, zoom: u8) -> TileAnchor {
    let n = f64::from(1u32 << zoom);
    let last = (1i64 << zoom) - 1;
    let lat = latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let fx = ((longitude + 180.0) / 360.0 * n).clamp(0.0, n);
    let fy = ((1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n).clamp(0.0, n);
    // The east and south edges belong to the last tile, not one past it.
    let x = (fx.floor() as i64).min(last);
    let y = (fy.floor() as i64).min(last);
    TileAnchor {
        zoom,
        x,
        y,
        offset_x: (fx - x as f64) * TILE_SIZE,
        offset_y: (fy - y as f64) * TILE_SIZE,
    }
}

pub fn tile_url(template: &str, zoom: u8, x: i64, y: i64) -> String {
    template
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
}

/// 3x3 grid around the anchor tile. Positions are relative to the grid's top
/// left corner; columns wrap around the antimeridian, rows outside the world
/// are skipped.
pub fn surrounding_tiles(anchor: &TileAnchor, template: &str) -> Vec<PlacedTile> {
    let n = 1i64 << anchor.zoom;
    let mut tiles = Vec::with_capacity(9);
    for row in -1i64..=1 {
        let y = anchor.y + row;
        if y < 0 || y >= n {
            continue;
        }
        for col in -1i64..=1 {
            let x = (anchor.x + col).rem_euclid(n);
            tiles.push(PlacedTile {
                url: tile_url(template, anchor.zoom, x, y),
                left: (col + 1) as f64 * TILE_SIZE,
                top: (row + 1) as f64 * TILE_SIZE,
            });
        }
    }
    tiles
}

/// Pixel position of the coordinate inside the 3x3 grid.
pub fn pin_position(anchor: &TileAnchor) -> (f64, f64) {
    (TILE_SIZE + anchor.offset_x, TILE_SIZE + anchor.offset_y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OSM: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

    #[test]
    fn origin_sits_at_world_centre() {
        let anchor = anchor_for(0.0, 0.0, 1);
        assert_eq!((anchor.x, anchor.y), (1, 1));
        assert!(anchor.offset_x.abs() < 1e-6);
        assert!(anchor.offset_y.abs() < 1e-6);
    }

    #[test]
    fn sao_paulo_resolves_to_known_tile() {
        let anchor = anchor_for(-23.5, -46.6, 16);
        assert_eq!(anchor.x, 24284);
        assert_eq!(anchor.y, 37171);
        assert!(anchor.offset_x >= 0.0 && anchor.offset_x < TILE_SIZE);
        assert!(anchor.offset_y >= 0.0 && anchor.offset_y < TILE_SIZE);
    }

    #[test]
    fn grid_wraps_columns_and_fills_template() {
        let anchor = anchor_for(10.0, -179.99, 2);
        let tiles = surrounding_tiles(&anchor, OSM);
        assert_eq!(tiles.len(), 9);
        assert!(tiles
            .iter()
            .any(|t| t.url == "https://tile.openstreetmap.org/2/3/1.png"));
        let (px, py) = pin_position(&anchor);
        assert!(px >= TILE_SIZE && px < 2.0 * TILE_SIZE);
        assert!(py >= TILE_SIZE && py < 2.0 * TILE_SIZE);
    }

    #[test]
    fn grid_skips_rows_outside_the_world() {
        let anchor = anchor_for(89.0, 0.0, 3);
        assert_eq!(anchor.y, 0);
        assert_eq!(surrounding_tiles(&anchor, OSM).len(), 6);
    }

    #[test]
    fn world_edges_stay_on_the_last_tile() {
        let anchor = anchor_for(-85.06, 180.0, DEFAULT_ZOOM);
        let last = (1i64 << DEFAULT_ZOOM) - 1;
        assert_eq!((anchor.x, anchor.y), (last, last));
        assert!(anchor.offset_x <= TILE_SIZE);
        assert!(anchor.offset_y <= TILE_SIZE);
        // The row below the last one is off the map.
        assert_eq!(surrounding_tiles(&anchor, OSM).len(), 6);
    }
}
