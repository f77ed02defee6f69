/// Generates an async client method that sends one request variant and
/// awaits its oneshot response.
///
/// A closed request channel maps to `ActorCommunicationError("Service closed")`
/// and a dropped responder to `ActorCommunicationError("Service dropped")`.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Service closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Service dropped".to_string()))?
            }
        }
    };
}
