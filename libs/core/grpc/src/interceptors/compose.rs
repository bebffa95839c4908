use tonic::{Request, Status};

/// Run `first`, then `second`. An error from `first` skips `second`.
pub fn compose_interceptors<A, B>(first: A, second: B) -> ComposedInterceptor<A, B>
where
  A: tonic::service::Interceptor,
  B: tonic::service::Interceptor,
{
  ComposedInterceptor { first, second }
}

#[derive(Clone, Debug)]
pub struct ComposedInterceptor<A, B> {
  first: A,
  second: B,
}

impl<A, B> tonic::service::Interceptor for ComposedInterceptor<A, B>
where
  A: tonic::service::Interceptor,
  B: tonic::service::Interceptor,
{
  fn call(&mut self, request: Request<()>) -> Result<Request<()>, Status> {
    let request = self.first.call(request)?;
    self.second.call(request)
  }
}
