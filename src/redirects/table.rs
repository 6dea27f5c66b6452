use std::collections::BTreeMap;
use std::path::Path;

use crate::utils::error::{BoxResult, MigrateError};
use crate::utils::fs::read_file;

/// Historical slugs that no normalization recovers (mixed script,
/// punctuation, renamed posts), mapped to their current slug.
const BUILTIN_ENTRIES: [(&str, &str); 24] = [
    ("keda-사용하기", "using-keda-pubsub-autoscaling"),
    ("keda 사용하기", "using-keda-pubsub-autoscaling"),
    ("GKE-워크로드아이덴티티", "gke-workload-identity"),
    ("GKE업데이트", "gke-automatic-updates"),
    ("GCP-GKE자동배포", "gcp-gke-automated-deployment"),
    ("k8s구성하기", "setting-up-kubernetes"),
    ("pvc용량증축하기", "expanding-pvc-capacity"),
    ("namespace지우기", "deleting-stuck-namespace"),
    ("2022년회고", "2022-retrospective"),
    ("회고1", "new-developer-retrospective"),
    ("간단한Git사용법-협업합시다", "basic-git-usage-for-collaboration"),
    ("AWS-웹사이트운영하기(Django)", "aws-deploy-django-website"),
    ("Cloud-Jam-중급반", "cloud-jam-intermediate-notes"),
    ("간단한대쉬보드", "building-simple-dashboard"),
    ("GCP이미지푸쉬", "pushing-gcp-container-images"),
    ("고객을끌어오는구글애널리틱스4", "google-analytics-4-book-review"),
    ("환경변수-추가하기", "managing-env-variables"),
    ("환경변수 추가하기", "managing-env-variables"),
    ("AWS-아마존-웹서비스", "aws-amazon-web-services-cloud-computing"),
    ("AWS - 아마존 웹서비스", "aws-amazon-web-services-cloud-computing"),
    ("Github-Action을-이용한-CI구축하기", "building-ci-with-github-actions"),
    ("Github Action을 이용한 CI구축하기", "building-ci-with-github-actions"),
    ("AWS-SAA후기", "aws-saa-exam-review"),
    ("AWS-RDS구축하기_new", "aws-rds-setup-new"),
];

/// Manual old-slug to new-slug lookup consulted after normalization fails
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugTable {
    entries: BTreeMap<String, String>,
}

impl SlugTable {
    /// An empty table
    pub fn new() -> Self {
        SlugTable::default()
    }

    /// The table shipped with the tool
    pub fn builtin() -> Self {
        BUILTIN_ENTRIES.iter().copied().collect()
    }

    /// Read a YAML mapping of old slug to new slug
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> BoxResult<Self> {
        let content = read_file(path.as_ref())?;
        Self::from_yaml_str(&content).map_err(|e| {
            MigrateError::Config(format!(
                "Failed to parse slug table {}: {}", path.as_ref().display(), e
            )).into()
        })
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        let entries: BTreeMap<String, String> = serde_yaml::from_str(content)?;
        Ok(SlugTable { entries })
    }

    /// Add entries from `other`, replacing existing ones with the same key
    pub fn merge(&mut self, other: SlugTable) {
        self.entries.extend(other.entries);
    }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, old: K, new: V) {
        self.entries.insert(old.into(), new.into());
    }

    pub fn get(&self, old: &str) -> Option<&str> {
        self.entries.get(old).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for SlugTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = SlugTable::new();
        for (old, new) in iter {
            table.insert(old, new);
        }
        table
    }
}
