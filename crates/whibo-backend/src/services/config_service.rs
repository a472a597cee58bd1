/// Handles an incoming configuration request (see
/// [`whibo_bridge::MessageToBackend::ConfigurationRequest`]).
pub async fn handle_config_request(context: &crate::app::AppContext) {
    let config = {
        let state = context.state.read().await;
        state.config.clone()
    };
    context
        .send(whibo_bridge::MessageFromBackend::ConfigurationResponse(
            config,
        ))
        .await;
}
