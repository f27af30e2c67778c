use std::collections::BTreeMap;

use anyhow::Result;
use parking_lot::RwLock;

use crate::model::{
    Company, CompanyId, Employee, EmployeeId, Entity, LinkIndex, Manager, ManagerId, WorkerId,
    Workers,
};
use crate::store::identity::{IdentityStrategy, RandomIdentity, SequenceIdentity};
use crate::store::traits::EntityStore;

/// In-memory store behind a single lock, which gives every operation the
/// per-operation atomicity the core assumes of its datastore. Entity maps are
/// keyed by identity; the link indexes mirror the many-to-one reference of
/// each child record, so parent lookups never scan.
///
/// Referential integrity of the references themselves is not checked here;
/// constraint enforcement belongs to a real datastore.
pub struct MemoryStore {
    state: RwLock<State>,
    company_ids: Box<dyn IdentityStrategy<CompanyId>>,
    employee_ids: Box<dyn IdentityStrategy<EmployeeId>>,
    manager_ids: Box<dyn IdentityStrategy<ManagerId>>,
    worker_ids: Box<dyn IdentityStrategy<WorkerId>>,
}

#[derive(Default)]
struct State {
    companies: BTreeMap<CompanyId, Company>,
    employees: BTreeMap<EmployeeId, Employee>,
    managers: BTreeMap<ManagerId, Manager>,
    workers: BTreeMap<WorkerId, Workers>,
    company_employees: LinkIndex<CompanyId, EmployeeId>,
    manager_workers: LinkIndex<ManagerId, WorkerId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_strategies(
            Box::new(SequenceIdentity::new()),
            Box::new(SequenceIdentity::new()),
            Box::new(RandomIdentity),
            Box::new(SequenceIdentity::new()),
        )
    }

    /// Build a store with explicit identity strategies per entity type.
    pub fn with_strategies(
        company_ids: Box<dyn IdentityStrategy<CompanyId>>,
        employee_ids: Box<dyn IdentityStrategy<EmployeeId>>,
        manager_ids: Box<dyn IdentityStrategy<ManagerId>>,
        worker_ids: Box<dyn IdentityStrategy<WorkerId>>,
    ) -> Self {
        Self {
            state: RwLock::new(State::default()),
            company_ids,
            employee_ids,
            manager_ids,
            worker_ids,
        }
    }

    /// Employee ids currently linked under a company, in id order.
    pub fn employees_of(&self, company_id: &CompanyId) -> Vec<EmployeeId> {
        self.state.read().company_employees.children_of(company_id)
    }

    /// Worker ids currently linked under a manager, in id order.
    pub fn workers_of(&self, manager_id: &ManagerId) -> Vec<WorkerId> {
        self.state.read().manager_workers.children_of(manager_id)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl EntityStore<Company> for MemoryStore {
    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>> {
        Ok(self.state.read().companies.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Company>> {
        Ok(self.state.read().companies.values().cloned().collect())
    }

    async fn save(&self, mut company: Company) -> Result<Company> {
        let mut state = self.state.write();
        let id = match company.id {
            Some(id) => id,
            None => self.company_ids.next_id(),
        };
        company.set_id(id);
        state.companies.insert(id, company.clone());
        Ok(company)
    }

    async fn delete_by_id(&self, id: &CompanyId) -> Result<bool> {
        let mut state = self.state.write();
        let removed = state.companies.remove(id).is_some();
        // Deleting an owner detaches its children instead of cascading.
        for employee_id in state.company_employees.clear_parent(id) {
            if let Some(employee) = state.employees.get_mut(&employee_id) {
                employee.company = None;
            }
        }
        Ok(removed)
    }

    async fn exists_by_id(&self, id: &CompanyId) -> Result<bool> {
        Ok(self.state.read().companies.contains_key(id))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.state.read().companies.len() as u64)
    }
}

#[async_trait::async_trait]
impl EntityStore<Employee> for MemoryStore {
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>> {
        Ok(self.state.read().employees.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>> {
        Ok(self.state.read().employees.values().cloned().collect())
    }

    async fn save(&self, mut employee: Employee) -> Result<Employee> {
        let mut state = self.state.write();
        let id = match employee.id {
            Some(id) => id,
            None => self.employee_ids.next_id(),
        };
        employee.set_id(id);
        match &employee.company {
            Some(company) => state.company_employees.attach(&company.id, &id),
            None => {
                if let Some(parent) = state.company_employees.parent_of(&id).cloned() {
                    state.company_employees.detach(&parent, &id);
                }
            }
        }
        state.employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn delete_by_id(&self, id: &EmployeeId) -> Result<bool> {
        let mut state = self.state.write();
        let removed = state.employees.remove(id).is_some();
        state.company_employees.remove_child(id);
        Ok(removed)
    }

    async fn exists_by_id(&self, id: &EmployeeId) -> Result<bool> {
        Ok(self.state.read().employees.contains_key(id))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.state.read().employees.len() as u64)
    }
}

#[async_trait::async_trait]
impl EntityStore<Manager> for MemoryStore {
    async fn find_by_id(&self, id: &ManagerId) -> Result<Option<Manager>> {
        Ok(self.state.read().managers.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Manager>> {
        Ok(self.state.read().managers.values().cloned().collect())
    }

    async fn save(&self, mut manager: Manager) -> Result<Manager> {
        let mut state = self.state.write();
        let id = match manager.id {
            Some(id) => id,
            None => self.manager_ids.next_id(),
        };
        manager.set_id(id);
        state.managers.insert(id, manager.clone());
        Ok(manager)
    }

    async fn delete_by_id(&self, id: &ManagerId) -> Result<bool> {
        let mut state = self.state.write();
        let removed = state.managers.remove(id).is_some();
        for worker_id in state.manager_workers.clear_parent(id) {
            if let Some(worker) = state.workers.get_mut(&worker_id) {
                worker.manager = None;
            }
        }
        Ok(removed)
    }

    async fn exists_by_id(&self, id: &ManagerId) -> Result<bool> {
        Ok(self.state.read().managers.contains_key(id))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.state.read().managers.len() as u64)
    }
}

#[async_trait::async_trait]
impl EntityStore<Workers> for MemoryStore {
    async fn find_by_id(&self, id: &WorkerId) -> Result<Option<Workers>> {
        Ok(self.state.read().workers.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Workers>> {
        Ok(self.state.read().workers.values().cloned().collect())
    }

    async fn save(&self, mut worker: Workers) -> Result<Workers> {
        let mut state = self.state.write();
        let id = match worker.id {
            Some(id) => id,
            None => self.worker_ids.next_id(),
        };
        worker.set_id(id);
        match &worker.manager {
            Some(manager) => state.manager_workers.attach(&manager.id, &id),
            None => {
                if let Some(parent) = state.manager_workers.parent_of(&id).cloned() {
                    state.manager_workers.detach(&parent, &id);
                }
            }
        }
        state.workers.insert(id, worker.clone());
        Ok(worker)
    }

    async fn delete_by_id(&self, id: &WorkerId) -> Result<bool> {
        let mut state = self.state.write();
        let removed = state.workers.remove(id).is_some();
        state.manager_workers.remove_child(id);
        Ok(removed)
    }

    async fn exists_by_id(&self, id: &WorkerId) -> Result<bool> {
        Ok(self.state.read().workers.contains_key(id))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.state.read().workers.len() as u64)
    }
}
