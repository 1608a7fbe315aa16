use shelf_core::{BookSummary, Effect, Msg, SearchError};
use shelf_engine::{CatalogError, CatalogEvent, CatalogSettings, EngineHandle, VolumeRecord};
use shelf_logging::{shelf_info, shelf_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        Ok(Self {
            engine: EngineHandle::new(settings)?,
        })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::QueryCatalog {
                    request_id,
                    term,
                    max_results,
                } => {
                    shelf_info!(
                        "QueryCatalog request_id={} term_len={} max_results={}",
                        request_id,
                        term.len(),
                        max_results
                    );
                    self.engine.enqueue(request_id, term, max_results);
                }
            }
        }
    }

    /// Drains finished catalog work into messages for `update`.
    pub fn poll(&self) -> Vec<Msg> {
        let mut inbox = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            inbox.push(map_event(event));
        }
        inbox
    }
}

fn map_event(event: CatalogEvent) -> Msg {
    match event {
        CatalogEvent::QueryCompleted {
            request_id,
            term,
            result,
        } => {
            let outcome = match result {
                Ok(records) => Ok(records.into_iter().map(map_record).collect()),
                Err(err) => {
                    shelf_warn!(
                        "Catalog request {} for {:?} failed: {}",
                        request_id,
                        term,
                        err
                    );
                    Err(SearchError::Catalog)
                }
            };
            Msg::SearchCompleted {
                request_id,
                outcome,
            }
        }
    }
}

fn map_record(record: VolumeRecord) -> BookSummary {
    BookSummary {
        id: record.id,
        title: record.title,
        authors: record.authors,
        published_date: record.published_date,
        page_count: record.page_count,
        category: record.category,
        cover_url: record.thumbnail,
        description: record.description,
        preview_link: record.preview_link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_engine::FailureKind;

    fn completed(result: Result<Vec<VolumeRecord>, CatalogError>) -> Msg {
        map_event(CatalogEvent::QueryCompleted {
            request_id: 4,
            term: "dune".into(),
            result,
        })
    }

    #[test]
    fn records_become_books_in_order() {
        let records = vec![
            VolumeRecord {
                id: "b".into(),
                thumbnail: Some("https://example.com/x.png".into()),
                ..VolumeRecord::default()
            },
            VolumeRecord {
                id: "a".into(),
                page_count: Some(12),
                ..VolumeRecord::default()
            },
        ];

        match completed(Ok(records)) {
            Msg::SearchCompleted {
                request_id,
                outcome: Ok(books),
            } => {
                assert_eq!(request_id, 4);
                let ids: Vec<_> = books.iter().map(|b| b.id.as_str()).collect();
                assert_eq!(ids, vec!["b", "a"]);
                assert_eq!(books[0].cover_url.as_deref(), Some("https://example.com/x.png"));
                assert_eq!(books[1].page_count, Some(12));
            }
            other => panic!("unexpected message {other:?}"),
        }
    }

    #[test]
    fn every_failure_kind_collapses() {
        for kind in [
            FailureKind::HttpStatus(500),
            FailureKind::Timeout,
            FailureKind::MalformedBody,
            FailureKind::Network,
        ] {
            let msg = completed(Err(CatalogError {
                kind,
                message: "detail".into(),
            }));
            assert_eq!(
                msg,
                Msg::SearchCompleted {
                    request_id: 4,
                    outcome: Err(SearchError::Catalog),
                }
            );
        }
    }
}
