//! Status normalization.

use log::{debug, trace};

use tracelane_core::{
    status::{CanonicalStatus, StatusVocabulary},
    trace::{Hop, RawTrace, Trace},
};

/// Converts a raw trace into a [`Trace`], classifying every hop's status.
///
/// This is the only place raw status tokens are read. Hop order and all
/// other hop metadata are preserved.
pub fn normalize(raw: RawTrace, vocabulary: &StatusVocabulary) -> Trace {
    let (session_id, components, raw_hops) = raw.into_parts();

    let mut counts = [0usize; 3];
    let hops: Vec<_> = raw_hops
        .into_iter()
        .map(|raw_hop| {
            let status = vocabulary.classify(raw_hop.raw_status(), raw_hop.is_error_flag());
            trace!(
                hop_id = raw_hop.id(),
                raw_status = raw_hop.raw_status(),
                status:% = status;
                "Classified hop status"
            );
            counts[status_slot(status)] += 1;
            Hop::new(raw_hop, status)
        })
        .collect();

    debug!(
        session_id,
        success = counts[0],
        error = counts[1],
        pending = counts[2];
        "Normalized hop statuses"
    );

    Trace::new(session_id, components, hops)
}

fn status_slot(status: CanonicalStatus) -> usize {
    match status {
        CanonicalStatus::Success => 0,
        CanonicalStatus::Error => 1,
        CanonicalStatus::Pending => 2,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use tracelane_core::{
        component::ComponentKind,
        trace::{DeclaredComponent, TraceHop},
    };

    use super::*;

    fn at(ms: i64) -> chrono::DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_normalize_classifies_each_hop() {
        let raw = RawTrace::new(
            "s1",
            vec![
                TraceHop::new("h1", at(0)).with_raw_status("sent"),
                TraceHop::new("h2", at(10)).with_raw_status("Queued"),
                TraceHop::new("h3", at(20)).with_raw_status("sent").with_error_flag(true),
                TraceHop::new("h4", at(30)).with_raw_status("failed"),
            ],
        );

        let trace = normalize(raw, &StatusVocabulary::default());
        let statuses: Vec<_> = trace.hops().iter().map(Hop::status).collect();
        assert_eq!(
            statuses,
            [
                CanonicalStatus::Success,
                CanonicalStatus::Pending,
                CanonicalStatus::Error,
                CanonicalStatus::Error,
            ]
        );
    }

    #[test]
    fn test_normalize_preserves_order_and_components() {
        let raw = RawTrace::new(
            "s1",
            vec![
                TraceHop::new("b", at(50)),
                TraceHop::new("a", at(0)),
            ],
        )
        .with_components(vec![DeclaredComponent::new("intake", ComponentKind::Service)]);

        let trace = normalize(raw, &StatusVocabulary::default());
        let ids: Vec<_> = trace.hops().iter().map(Hop::id).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(trace.components().map(<[_]>::len), Some(1));
        assert_eq!(trace.session_id(), "s1");
    }
}
