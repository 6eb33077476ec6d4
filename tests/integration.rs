use shortlink::{ColorMarker, IssueRef, RepoContext, Segment, StyledDocument, annotate, scan};

fn context() -> RepoContext {
    RepoContext::new("rnystrom", "GitHawk").unwrap()
}

/// Collect (text, issue) pairs from every styled segment, the way a
/// navigation layer would walk the document.
fn linked_issues(document: &StyledDocument) -> Vec<(String, IssueRef)> {
    let mut links = Vec::new();
    for segment in &document.segments {
        let Segment::Styled { attributes, text } = segment else {
            continue;
        };
        assert_eq!(attributes.color, Some(ColorMarker::Link));
        let issue = attributes.issue.clone().expect("styled segment without issue payload");
        links.push((text.clone(), issue));
    }
    links
}

#[test]
fn annotates_a_realistic_issue_comment() {
    let body = "\
Thanks for the report! This is a duplicate of #1234 and was first seen
in Unibeautify/unibeautify-cli#115 (the f/#123 form in the log output
is a red herring, as is commit a1b2c3).

Fixes #12) and tracks rnystrom/githawk#4321 for the follow-up.";

    let document = annotate(body, &context());
    assert_eq!(document.plain_text(), body);

    let links = linked_issues(&document);
    let texts: Vec<&str> = links.iter().map(|(text, _)| text.as_str()).collect();
    assert_eq!(
        texts,
        ["#1234", "Unibeautify/unibeautify-cli#115", "#12", "rnystrom/githawk#4321"]
    );

    // Bare references inherit the context; qualified ones carry their slug.
    assert_eq!(links[0].1.path(), "rnystrom/GitHawk#1234");
    assert_eq!(links[1].1.path(), "Unibeautify/unibeautify-cli#115");
    assert_eq!(links[3].1.owner, "rnystrom");
    assert_eq!(links[3].1.repo, "githawk");
    assert_eq!(links[3].1.number, 4321);
}

#[test]
fn noisy_text_produces_an_all_plain_document() {
    let body = "imo the best pr so far is prob # 1906, or maybe v1#2? see 1#1, f#123, #123F";
    let document = annotate(body, &context());
    assert!(linked_issues(&document).is_empty());
    assert_eq!(document.segments.len(), 1);
    assert_eq!(document.plain_text(), body);
}

#[test]
fn scan_results_are_ordered_and_disjoint() {
    let body = "#100 #150 #200 and rnystrom/githawk#4321 trailing";
    let matches = scan(body, &context());
    assert_eq!(matches.len(), 4);
    for pair in matches.windows(2) {
        assert!(pair[0].range.end <= pair[1].range.start);
    }
    for matched in &matches {
        assert_eq!(matched.display_text, &body[matched.range.clone()]);
    }
}

#[test]
fn document_survives_a_serde_round_trip() {
    let body = "release notes: closed #7, #8 and octocat/hello-world#9.";
    let document = annotate(body, &context());

    let json = serde_json::to_string(&document).unwrap();
    let restored: StyledDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, document);
    assert_eq!(restored.plain_text(), body);
}

#[test]
fn serialized_segments_keep_namespaced_attribute_keys() {
    let document = annotate("#42", &context());
    let value = serde_json::to_value(&document).unwrap();

    let styled = &value["segments"][0]["Styled"];
    assert_eq!(styled["text"], "#42");
    assert_eq!(styled["attributes"]["shortlink.color"], "link");
    assert_eq!(styled["attributes"]["shortlink.issue"]["number"], 42);
}
