use uuid::Uuid;

/// A geographic region walks belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Non-identifier fields of a region, as supplied on add and update.
#[derive(Debug, Clone)]
pub struct RegionData {
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl RegionData {
    pub fn into_region(self, id: Uuid) -> Region {
        Region {
            id,
            code: self.code,
            name: self.name,
            area: self.area,
            lat: self.lat,
            long: self.long,
            population: self.population,
        }
    }
}
