use async_trait::async_trait;
use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use vetted_dns_application::ports::{ResolverList, ResolverListSink, ResolverListSource};
use vetted_dns_domain::DomainError;

/// File location of each published list.
#[derive(Debug, Clone)]
pub struct ListPaths {
    pub validated: PathBuf,
    pub soa_tolerant: PathBuf,
}

impl ListPaths {
    pub fn new(validated: impl Into<PathBuf>, soa_tolerant: impl Into<PathBuf>) -> Self {
        Self {
            validated: validated.into(),
            soa_tolerant: soa_tolerant.into(),
        }
    }

    pub fn path(&self, list: ResolverList) -> &Path {
        match list {
            ResolverList::Validated => &self.validated,
            ResolverList::SoaTolerant => &self.soa_tolerant,
        }
    }
}

/// Writes each list as plain text, one address per line in ascending order.
pub struct TextListSink {
    paths: ListPaths,
}

impl TextListSink {
    pub fn new(paths: ListPaths) -> Self {
        Self { paths }
    }
}

/// Sibling file a list is written to before being renamed into place.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}

pub fn render(addresses: &BTreeSet<Ipv4Addr>) -> String {
    let mut out = String::with_capacity(addresses.len() * 16);
    for address in addresses {
        out.push_str(&address.to_string());
        out.push('\n');
    }
    out
}

#[async_trait]
impl ResolverListSink for TextListSink {
    async fn write(
        &self,
        list: ResolverList,
        addresses: &BTreeSet<Ipv4Addr>,
    ) -> Result<(), DomainError> {
        let path = self.paths.path(list);

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::IoError(format!("{}: {}", parent.display(), e)))?;
        }

        let staging = staging_path(path);
        tokio::fs::write(&staging, render(addresses))
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", staging.display(), e)))?;
        tokio::fs::rename(&staging, path)
            .await
            .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;

        info!(list = %list, path = %path.display(), count = addresses.len(), "Resolver list written");
        Ok(())
    }
}

/// Reads lists written by [`TextListSink`]. Blank and malformed lines are skipped.
pub struct TextListSource {
    paths: ListPaths,
}

impl TextListSource {
    pub fn new(paths: ListPaths) -> Self {
        Self { paths }
    }
}

pub fn parse(contents: &str) -> BTreeSet<Ipv4Addr> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match line.parse() {
            Ok(address) => Some(address),
            Err(_) => {
                debug!(line, "Skipping malformed list entry");
                None
            }
        })
        .collect()
}

#[async_trait]
impl ResolverListSource for TextListSource {
    async fn read(&self, list: ResolverList) -> Result<BTreeSet<Ipv4Addr>, DomainError> {
        let path = self.paths.path(list);
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| DomainError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;

        Ok(parse(&contents))
    }
}
