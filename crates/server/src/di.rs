use shared::{
    abstract_trait::payment_detail::{
        repository::{
            command::DynPaymentDetailCommandRepository, query::DynPaymentDetailQueryRepository,
        },
        service::{command::DynPaymentDetailCommandService, query::DynPaymentDetailQueryService},
    },
    config::ConnectionPool,
    repository::payment_detail::{PaymentDetailCommandRepository, PaymentDetailQueryRepository},
    service::payment_detail::{PaymentDetailCommandService, PaymentDetailQueryService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub payment_detail_query: DynPaymentDetailQueryService,
    pub payment_detail_command: DynPaymentDetailCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("payment_detail_query", &"DynPaymentDetailQueryService")
            .field("payment_detail_command", &"DynPaymentDetailCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let query_repository =
            Arc::new(PaymentDetailQueryRepository::new(pool.clone())) as DynPaymentDetailQueryRepository;
        let command_repository =
            Arc::new(PaymentDetailCommandRepository::new(pool)) as DynPaymentDetailCommandRepository;

        let payment_detail_query =
            Arc::new(PaymentDetailQueryService::new(query_repository)) as DynPaymentDetailQueryService;
        let payment_detail_command = Arc::new(PaymentDetailCommandService::new(command_repository))
            as DynPaymentDetailCommandService;

        Self {
            payment_detail_query,
            payment_detail_command,
        }
    }
}
