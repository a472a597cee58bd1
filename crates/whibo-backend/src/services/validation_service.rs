use whibo_bridge::MessageFromBackend;

use crate::page::{INVALID_CLASS, URL_INPUT_ID};
use crate::validation::is_valid_video_url;

/// Handles an input event on the URL field: stores the text and toggles the
/// invalid marker. Empty text is never marked.
///
/// Ignored when the page has no URL field.
pub async fn handle_url_input(context: &crate::app::AppContext, text: &str) {
    let valid = text.is_empty() || is_valid_video_url(text);

    let snapshot = {
        let mut state = context.state.write().await;
        let Some(input) = state.document.element_by_id_mut(URL_INPUT_ID) else {
            log::debug!("No #{URL_INPUT_ID} field on the page, ignoring input");
            return;
        };

        input.value = text.to_owned();
        if valid {
            input.remove_class(INVALID_CLASS);
        } else {
            input.add_class(INVALID_CLASS);
        }
        state.document.snapshot()
    };

    context.publish(snapshot).await;
    context.send(MessageFromBackend::UrlValidity { valid }).await;
}

#[cfg(test)]
mod tests {
    use whibo_bridge::MessageFromBackend;
    use whibo_page::Document;

    use super::*;
    use crate::test_support::{drain, helper_with_config, helper_with_document};

    async fn is_marked(helper: &crate::ClientUiHelper) -> bool {
        helper
            .with_document(|d| {
                d.get(d.element_by_id(URL_INPUT_ID).unwrap())
                    .unwrap()
                    .has_class(INVALID_CLASS)
            })
            .await
    }

    #[tokio::test]
    async fn marks_and_clears_the_field() {
        let (helper, mut rx, _) = helper_with_config(Default::default()).await;

        helper.url_input("https://youtu").await;
        assert!(is_marked(&helper).await);

        helper.url_input("https://youtu.be/dQw4w9WgXcQ").await;
        assert!(!is_marked(&helper).await);

        helper.url_input("not a url").await;
        assert!(is_marked(&helper).await);

        helper.url_input("").await;
        assert!(!is_marked(&helper).await);

        let validity: Vec<bool> = drain(&mut rx)
            .into_iter()
            .filter_map(|message| match message {
                MessageFromBackend::UrlValidity { valid } => Some(valid),
                _ => None,
            })
            .collect();
        assert_eq!(validity, vec![false, true, false, true]);
    }

    #[tokio::test]
    async fn stores_the_typed_value() {
        let (helper, _rx, _) = helper_with_config(Default::default()).await;
        helper.url_input("https://www.youtube.com/watch?v=dQw4w9WgXcQ").await;

        let value = helper
            .with_document(|d| d.get(d.element_by_id(URL_INPUT_ID).unwrap()).unwrap().value.clone())
            .await;
        assert_eq!(value, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }

    #[tokio::test]
    async fn missing_field_is_ignored() {
        let (helper, mut rx, _) = helper_with_document(Document::new()).await;
        helper.url_input("not a url").await;
        assert!(drain(&mut rx).is_empty());
    }
}
