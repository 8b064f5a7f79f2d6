//! Sitemap export of the location hierarchy.
//!
//! Every country becomes a top-level entry mapping its title to its slug, with its states and
//! state-less cities nested beneath it as `{slug: "country/state[/city]"}` entries. The output
//! is deterministic so re-running the job on unchanged data yields byte-identical files.

use std::{collections::HashMap, io, path::Path};

use entity::location::LocationType;
use sea_orm::DatabaseConnection;
use serde::{ser::SerializeMap, Serialize, Serializer};
use serde_json::ser::{Formatter, PrettyFormatter};

use crate::server::{
    data::location::LocationRepository, error::Error, model::db::LocationModel,
    util::slug::slugify,
};

/// A single sitemap node, serialized as `{key: value}` followed by `locations` when present
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitemapEntry {
    pub key: String,
    pub value: String,
    pub locations: Option<Vec<SitemapEntry>>,
}

impl SitemapEntry {
    fn leaf(key: String, value: String) -> Self {
        Self {
            key,
            value,
            locations: None,
        }
    }
}

impl Serialize for SitemapEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.locations.is_some() { 2 } else { 1 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(&self.key, &self.value)?;
        if let Some(locations) = &self.locations {
            map.serialize_entry("locations", locations)?;
        }
        map.end()
    }
}

/// Location arena with a `parent_id → children` index built once per traversal
struct LocationTree {
    locations: Vec<LocationModel>,
    children: HashMap<String, Vec<usize>>,
}

impl LocationTree {
    fn new(locations: Vec<LocationModel>) -> Self {
        let mut children: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, location) in locations.iter().enumerate() {
            if let Some(parent_id) = &location.parent_id {
                children.entry(parent_id.clone()).or_default().push(idx);
            }
        }

        Self {
            locations,
            children,
        }
    }

    /// Direct children of `parent_id` with the given type, sorted by title
    fn children_of(&self, parent_id: &str, location_type: LocationType) -> Vec<&LocationModel> {
        let mut children: Vec<&LocationModel> = self
            .children
            .get(parent_id)
            .map(|indices| {
                indices
                    .iter()
                    .map(|&idx| &self.locations[idx])
                    .filter(|location| location.location_type == location_type)
                    .collect()
            })
            .unwrap_or_default();

        children.sort_by(|a, b| a.title.cmp(&b.title));
        children
    }

    fn of_type(&self, location_type: LocationType) -> impl Iterator<Item = &LocationModel> {
        self.locations
            .iter()
            .filter(move |location| location.location_type == location_type)
    }
}

/// Builds the sitemap from every country, state and city location
///
/// Nested lists are sorted by entry key (the slug), countries by their key (the title). Ties keep
/// states ahead of cities since sorting is stable.
pub fn build_sitemap(locations: Vec<LocationModel>) -> Vec<SitemapEntry> {
    let tree = LocationTree::new(locations);
    let mut sitemap = Vec::new();

    for country in tree.of_type(LocationType::Country) {
        let country_slug = slugify(&country.title);
        let mut entries = Vec::new();

        for state in tree.children_of(&country.id, LocationType::State) {
            let state_slug = slugify(&state.title);
            let state_url = format!("{}/{}", country_slug, state_slug);

            let cities: Vec<SitemapEntry> = tree
                .children_of(&state.id, LocationType::City)
                .into_iter()
                .map(|city| {
                    let city_slug = slugify(&city.title);
                    let city_url = format!("{}/{}", state_url, city_slug);
                    SitemapEntry::leaf(city_slug, city_url)
                })
                .collect();

            entries.push(SitemapEntry {
                key: state_slug,
                value: state_url,
                locations: (!cities.is_empty()).then_some(cities),
            });
        }

        for city in tree.children_of(&country.id, LocationType::City) {
            let city_slug = slugify(&city.title);
            let city_url = format!("{}/{}", country_slug, city_slug);
            entries.push(SitemapEntry::leaf(city_slug, city_url));
        }

        entries.sort_by(|a, b| a.key.cmp(&b.key));

        sitemap.push(SitemapEntry {
            key: country.title.clone(),
            value: country_slug,
            locations: Some(entries),
        });
    }

    sitemap.sort_by(|a, b| a.key.cmp(&b.key));
    sitemap
}

/// Serializes the sitemap with 4-space indentation, escaping everything outside printable ASCII
pub fn render_sitemap(sitemap: &[SitemapEntry]) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    let formatter = AsciiFormatter(PrettyFormatter::with_indent(b"    "));
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    sitemap.serialize(&mut serializer)?;

    Ok(buf)
}

pub struct SitemapService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SitemapService<'a> {
    /// Creates a new instance of [`SitemapService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the hierarchy once and builds the sitemap
    pub async fn build(&self) -> Result<Vec<SitemapEntry>, Error> {
        let location_repo = LocationRepository::new(self.db);
        let locations = location_repo
            .get_by_types(&[LocationType::Country, LocationType::State, LocationType::City])
            .await?;

        Ok(build_sitemap(locations))
    }

    /// Builds the sitemap and writes it to `path`, replacing any existing file
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of country entries written
    /// - `Err(Error::DbErr)` - Loading locations failed
    /// - `Err(Error::IoError)` - The output file could not be written
    pub async fn generate(&self, path: &Path) -> Result<usize, Error> {
        let sitemap = self.build().await?;
        let contents = render_sitemap(&sitemap)?;

        tokio::fs::write(path, contents).await?;

        tracing::info!(
            "Wrote sitemap with {} countries to {}",
            sitemap.len(),
            path.display()
        );

        Ok(sitemap.len())
    }
}

/// Pretty printer escaping non-printable and non-ASCII characters as `\uXXXX`
struct AsciiFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                writer.write_all(&[c as u8])?;
            } else {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }

        Ok(())
    }
}
