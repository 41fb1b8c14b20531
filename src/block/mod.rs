
use tokio::sync::mpsc;
use tokio::task::JoinHandle;


pub enum BlockResult<U> {
	NotReady,
	Ready(U),
}

// A type that implements BlockFunctionality consumes instances of T and 
// produces either Ready(U) if an output is ready or NotReady if it is not;
// a failed control message ends the block's task
pub trait BlockFunctionality<C: Clone, D, T: Clone, U> {

	// Inputs and control values are borrowed; a block that needs an owned value can clone it
	fn control(&mut self, control:&C) -> Result<D, &'static str>;
	fn apply(&mut self, input:&T) -> BlockResult<U>;

}

pub struct Block<C: 'static + Send, T: 'static + Send, U: 'static + Send> {
	pub tx_control: mpsc::Sender<C>,
	pub tx_input:   mpsc::Sender<T>,
	pub rx_output:  mpsc::Receiver<U>,
	pub handles:    Vec<JoinHandle<Result<(), &'static str>>>,
}

impl<C: Send + Sync + Clone, T: Send + Sync + Clone, U: Send + Sync> Block<C, T, U> {

	pub fn from<B: 'static + BlockFunctionality<C, (), T, U> + Send>(b:B) -> Self {
		
		let (tx_control, mut rx_control) = mpsc::channel::<C>(10);
		let (  tx_input,   mut rx_input) = mpsc::channel::<T>(10);
		let ( tx_output,      rx_output) = mpsc::channel::<U>(10);

		let handle:JoinHandle<Result<(), &'static str>> = tokio::spawn(async move {

			let mut owned_b = b;

			while let Some(t) = rx_input.recv().await {

				// Interleaving control handling with input handling means no mutex is needed around the state
				while let Ok(c) = rx_control.try_recv() {
					owned_b.control(&c)?;
				}

				if let BlockResult::Ready(u) = owned_b.apply(&t) {
					tx_output.send(u).await.map_err(|_| "Unable to send output")?;
				}

			}

			Ok(())
		});

		let handles = vec![handle];

		Block{ tx_control, tx_input, rx_output, handles }
	}

	pub async fn shutdown(self) -> Result<(), &'static str> {
		
		let Block{ tx_control, tx_input, rx_output:_, handles } = self;
		
		drop(tx_control);
		drop(tx_input);
		
		for handle in handles {
			handle.await.map_err(|_| "Block task panicked or was cancelled")??;
		}

		Ok(())
	}

}
