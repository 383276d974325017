use orderdesk_clients::{Client, ClientValidator};
use orderdesk_core::{ClientId, DomainResult, require};
use orderdesk_infra::{ClientRepository, OrderRepository};

/// Client lifecycle rules.
#[derive(Debug)]
pub struct ClientService<V, C, O> {
    validator: V,
    clients: C,
    orders: O,
}

impl<V, C, O> ClientService<V, C, O> {
    pub fn new(validator: V, clients: C, orders: O) -> Self {
        Self {
            validator,
            clients,
            orders,
        }
    }

    pub fn into_parts(self) -> (V, C, O) {
        (self.validator, self.clients, self.orders)
    }
}

impl<V, C, O> ClientService<V, C, O>
where
    V: ClientValidator,
    C: ClientRepository,
    O: OrderRepository,
{
    /// Store a new client.
    ///
    /// `Ok(false)` if the validator rejects it or the id is already taken.
    pub fn add_client(&self, client: Option<Client>) -> DomainResult<bool> {
        let client = require(client, "client")?;
        if !self.validator.is_valid(&client) {
            tracing::debug!("client {} rejected by validator", client.id_typed());
            return Ok(false);
        }

        let id = client.id_typed();
        let added = self.clients.add(client);
        if added {
            tracing::info!("client {} added", id);
        }
        Ok(added)
    }

    /// Replace a stored client's details.
    ///
    /// `Ok(false)` if the validator rejects it or no client has this id.
    pub fn update_client(&self, client: Option<Client>) -> DomainResult<bool> {
        let client = require(client, "client")?;
        if !self.validator.is_valid(&client) {
            tracing::debug!("client {} update rejected by validator", client.id_typed());
            return Ok(false);
        }

        let id = client.id_typed();
        let updated = self.clients.update(client);
        if updated {
            tracing::info!("client {} updated", id);
        }
        Ok(updated)
    }

    /// Remove a client that has no orders.
    ///
    /// Field validity is not checked. Clients with orders are kept and
    /// `Ok(false)` is returned; orders are never deleted in cascade.
    pub fn delete_client(&self, client: Option<&Client>) -> DomainResult<bool> {
        let client = require(client, "client")?;
        let orders = self.orders.get_by_client_id(client.id_typed());
        if !orders.is_empty() {
            tracing::debug!(
                "client {} not deleted: {} order(s) outstanding",
                client.id_typed(),
                orders.len()
            );
            return Ok(false);
        }

        let deleted = self.clients.delete(client);
        if deleted {
            tracing::info!("client {} deleted", client.id_typed());
        }
        Ok(deleted)
    }

    pub fn get_client(&self, id: ClientId) -> Option<Client> {
        self.clients.get_by_id(id)
    }

    pub fn get_all_clients(&self) -> Vec<Client> {
        self.clients.get_all()
    }
}
